#[cfg(test)]
mod tests {
    use crate::config::round::CountdownConfig;
    use crate::game::countdown::{Countdown, CountdownStep};
    use crate::game::controller::RoundController;
    use crate::game::error::RoundError;
    use crate::game::scheduler::Scheduler;
    use crate::game::snapshot::Snapshot;
    use crate::game::types::{Player, RoundEvent, RoundPhase, Scores, Winner};

    /// Scheduler double: remembers the armed countdown and lets the test
    /// deliver its steps synchronously.
    #[derive(Default)]
    struct ManualScheduler {
        armed: Option<Countdown>,
        starts: Vec<(u64, u64)>,
        cancels: usize,
    }

    impl Scheduler for ManualScheduler {
        fn start(&mut self, duration_ms: u64, interval_ms: u64) {
            self.starts.push((duration_ms, interval_ms));
            self.armed = Some(Countdown::new(duration_ms, interval_ms));
        }

        fn cancel(&mut self) {
            self.cancels += 1;
            self.armed = None;
        }
    }

    type Controller = RoundController<ManualScheduler, Vec<RoundEvent>>;

    fn controller() -> Controller {
        RoundController::new(ManualScheduler::default(), Vec::new())
    }

    /// Deliver the next `n` countdown steps.
    fn advance(ctrl: &mut Controller, n: usize) {
        for _ in 0..n {
            let step = ctrl.scheduler_mut().armed.as_mut().and_then(|c| c.next());
            match step {
                Some((_, CountdownStep::Tick(remaining))) => ctrl.on_tick(remaining),
                Some((_, CountdownStep::Expire)) => {
                    ctrl.scheduler_mut().armed = None;
                    ctrl.on_timer_expire();
                }
                None => break,
            }
        }
    }

    fn run_to_expiry(ctrl: &mut Controller) {
        advance(ctrl, usize::MAX);
    }

    #[test]
    fn test_fresh_round_is_not_started() {
        let ctrl = controller();
        assert_eq!(ctrl.phase(), RoundPhase::NotStarted);
        assert!(!ctrl.is_started());
        assert_eq!(ctrl.score(Player::PlayerOne), 0);
        assert_eq!(ctrl.score(Player::PlayerTwo), 0);
        assert_eq!(ctrl.state().time_remaining_ms, 20000);
        assert!(ctrl.scheduler().starts.is_empty());
        assert!(ctrl.sink().is_empty());
    }

    #[test]
    fn test_first_tap_arms_countdown_once() {
        let mut ctrl = controller();
        ctrl.register_tap(Player::PlayerTwo);
        ctrl.register_tap(Player::PlayerOne);
        ctrl.register_tap(Player::PlayerTwo);

        assert!(ctrl.is_started());
        assert_eq!(ctrl.phase(), RoundPhase::Running);
        assert_eq!(ctrl.scheduler().starts, vec![(20000, 1000)]);
    }

    #[test]
    fn test_taps_count_per_player() {
        let mut ctrl = controller();
        let taps = [
            Player::PlayerOne,
            Player::PlayerOne,
            Player::PlayerTwo,
            Player::PlayerOne,
            Player::PlayerTwo,
            Player::PlayerOne,
        ];
        for player in taps {
            let other_before = ctrl.score(player.other());
            ctrl.register_tap(player);
            assert_eq!(ctrl.score(player.other()), other_before);
        }
        assert_eq!(ctrl.score(Player::PlayerOne), 4);
        assert_eq!(ctrl.score(Player::PlayerTwo), 2);

        let last = ctrl.sink().last().cloned();
        assert_eq!(last, Some(RoundEvent::ScoreChanged { player: Player::PlayerOne, score: 4 }));
    }

    #[test]
    fn test_ticks_report_whole_seconds() {
        let mut ctrl = controller();
        ctrl.register_tap(Player::PlayerOne);
        ctrl.sink_mut().clear();

        advance(&mut ctrl, 3);
        assert_eq!(ctrl.state().time_remaining_ms, 17000);
        assert_eq!(
            ctrl.sink().as_slice(),
            &[
                RoundEvent::TimeChanged { seconds_remaining: 19 },
                RoundEvent::TimeChanged { seconds_remaining: 18 },
                RoundEvent::TimeChanged { seconds_remaining: 17 },
            ]
        );
    }

    #[test]
    fn test_time_never_increases_while_running() {
        let mut ctrl = controller();
        ctrl.register_tap(Player::PlayerOne);
        ctrl.on_tick(12000);
        ctrl.on_tick(14000);
        assert_eq!(ctrl.state().time_remaining_ms, 12000);

        let mut last = ctrl.state().time_remaining_ms;
        for remaining in [11500, 11500, 9000, 30000, 0] {
            ctrl.on_tick(remaining);
            assert!(ctrl.state().time_remaining_ms <= last);
            last = ctrl.state().time_remaining_ms;
        }
    }

    #[test]
    fn test_winner_uses_scores_before_reset() {
        let mut ctrl = controller();
        for _ in 0..5 {
            ctrl.register_tap(Player::PlayerOne);
        }
        for _ in 0..3 {
            ctrl.register_tap(Player::PlayerTwo);
        }
        ctrl.sink_mut().clear();

        run_to_expiry(&mut ctrl);

        let ended_at = ctrl
            .sink()
            .iter()
            .position(|e| matches!(e, RoundEvent::RoundEnded { .. }))
            .unwrap();
        assert_eq!(
            ctrl.sink()[ended_at],
            RoundEvent::RoundEnded {
                winner: Winner::PlayerOne,
                final_scores: Scores { player_one: 5, player_two: 3 },
            }
        );
        // Redraw of the fresh round follows the announcement.
        assert_eq!(
            &ctrl.sink()[ended_at + 1..],
            &[
                RoundEvent::ScoreChanged { player: Player::PlayerOne, score: 0 },
                RoundEvent::ScoreChanged { player: Player::PlayerTwo, score: 0 },
                RoundEvent::TimeChanged { seconds_remaining: 20 },
            ]
        );
    }

    #[test]
    fn test_equal_scores_are_a_draw() {
        let mut ctrl = controller();
        for _ in 0..3 {
            ctrl.register_tap(Player::PlayerOne);
            ctrl.register_tap(Player::PlayerTwo);
        }
        run_to_expiry(&mut ctrl);

        assert!(ctrl.sink().contains(&RoundEvent::RoundEnded {
            winner: Winner::Draw,
            final_scores: Scores { player_one: 3, player_two: 3 },
        }));
        assert_eq!(Winner::Draw.label(), "No one");
    }

    #[test]
    fn test_player_two_wins_with_more_taps() {
        assert_eq!(Winner::from_scores(Scores { player_one: 1, player_two: 7 }), Winner::PlayerTwo);
    }

    #[test]
    fn test_expiry_resets_round() {
        let mut ctrl = controller();
        ctrl.register_tap(Player::PlayerTwo);
        run_to_expiry(&mut ctrl);

        assert_eq!(ctrl.phase(), RoundPhase::NotStarted);
        assert_eq!(ctrl.score(Player::PlayerOne), 0);
        assert_eq!(ctrl.score(Player::PlayerTwo), 0);
        assert_eq!(ctrl.state().time_remaining_ms, 20000);

        // Next tap starts a brand new round from the full duration.
        ctrl.register_tap(Player::PlayerOne);
        assert_eq!(ctrl.scheduler().starts, vec![(20000, 1000), (20000, 1000)]);
        assert_eq!(ctrl.score(Player::PlayerOne), 1);
    }

    #[test]
    fn test_expiry_is_handled_once() {
        let mut ctrl = controller();
        ctrl.register_tap(Player::PlayerOne);
        run_to_expiry(&mut ctrl);
        let events = ctrl.sink().len();

        ctrl.on_timer_expire();
        ctrl.on_tick(500);
        assert_eq!(ctrl.sink().len(), events);
    }

    #[test]
    fn test_signals_before_first_tap_are_ignored() {
        let mut ctrl = controller();
        ctrl.on_tick(5000);
        ctrl.on_timer_expire();
        assert_eq!(ctrl.state().time_remaining_ms, 20000);
        assert!(ctrl.sink().is_empty());
    }

    #[test]
    fn test_restore_then_tap_resumes_round() {
        let mut ctrl = controller();
        ctrl.restore_from(Snapshot::new(3, 2, 15000)).unwrap();
        assert!(!ctrl.is_started());
        assert_eq!(ctrl.seconds_remaining(), 15);

        ctrl.register_tap(Player::PlayerOne);
        assert!(ctrl.is_started());
        assert_eq!(ctrl.score(Player::PlayerOne), 4);
        assert_eq!(ctrl.score(Player::PlayerTwo), 2);
        assert_eq!(ctrl.scheduler().starts, vec![(15000, 1000)]);

        advance(&mut ctrl, 1);
        assert_eq!(ctrl.state().time_remaining_ms, 14000);
    }

    #[test]
    fn test_restore_rejects_time_beyond_duration() {
        let mut ctrl = controller();
        ctrl.register_tap(Player::PlayerOne);
        let err = ctrl.restore_from(Snapshot::new(3, 2, 25000)).unwrap_err();

        assert!(matches!(err, RoundError::InvalidSnapshot(_)));
        // The round in play is untouched.
        assert_eq!(ctrl.phase(), RoundPhase::Running);
        assert_eq!(ctrl.score(Player::PlayerOne), 1);
    }

    #[test]
    fn test_restore_with_no_time_left_expires_on_tap() {
        let mut ctrl = controller();
        ctrl.restore_from(Snapshot::new(2, 4, 0)).unwrap();
        ctrl.register_tap(Player::PlayerOne);
        run_to_expiry(&mut ctrl);

        assert!(ctrl.sink().contains(&RoundEvent::RoundEnded {
            winner: Winner::PlayerTwo,
            final_scores: Scores { player_one: 3, player_two: 4 },
        }));
        assert_eq!(ctrl.phase(), RoundPhase::NotStarted);
    }

    #[test]
    fn test_snapshot_does_not_cancel_countdown() {
        let mut ctrl = controller();
        ctrl.register_tap(Player::PlayerTwo);
        advance(&mut ctrl, 4);

        assert_eq!(ctrl.snapshot(), Snapshot::new(0, 1, 16000));
        assert_eq!(ctrl.scheduler().cancels, 0);
        assert!(ctrl.scheduler().armed.is_some());
    }

    #[test]
    fn test_initialize_fresh_mid_round_cancels_countdown() {
        let mut ctrl = controller();
        ctrl.register_tap(Player::PlayerOne);
        advance(&mut ctrl, 2);
        ctrl.initialize_fresh();

        assert_eq!(ctrl.scheduler().cancels, 1);
        assert!(ctrl.scheduler().armed.is_none());
        assert!(!ctrl.is_started());
        assert_eq!(ctrl.state().time_remaining_ms, 20000);
    }

    #[test]
    fn test_custom_config_drives_countdown() {
        let config = CountdownConfig::new(2500, 1000).unwrap();
        let mut ctrl = RoundController::with_config(config, ManualScheduler::default(), Vec::new());
        ctrl.register_tap(Player::PlayerOne);
        ctrl.sink_mut().clear();
        run_to_expiry(&mut ctrl);

        assert_eq!(
            ctrl.sink()[..2],
            [
                RoundEvent::TimeChanged { seconds_remaining: 1 },
                RoundEvent::TimeChanged { seconds_remaining: 0 },
            ]
        );
        assert_eq!(ctrl.state().time_remaining_ms, 2500);
    }
}
