#[cfg(test)]
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_move_right_observes_move_right() {
        let level = r#"
#P .#
#@  #
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);

        let expected_level = r#"
# P.#
#@  #
"#;
        game.assert_matches(expected_level);
        assert_eq!(game.game_state.moves, 1);
    }

    #[test]
    fn when_push_pushes() {
        let level = r#"
#P@ .#
"#;
        let mut game = GameTestState::new(level);
        let update = game.assert_move(Right);

        assert!(matches!(update, GameUpdate::NextState(_, GameChangeType::PlayerAndBoxMove)));
        game.assert_matches(r#"
# P@.#
"#);
    }

    #[test]
    fn when_walking_into_wall_nothing_changes() {
        let level = r#"
#####
#.#@#
# P #
#####
"#;
        let mut game = GameTestState::new(level);
        let update = game.assert_blocked(Down);
        assert_eq!(update, GameUpdate::Blocked(BlockReason::Wall));
        game.assert_blocked(Up);
        assert_eq!(game.game_state.moves, 0);
    }

    #[test]
    fn walls_block_every_direction() {
        let level = r#"
######
#.####
##@P##
######
"#;
        let mut game = GameTestState::new(level);
        for dir in Direction::ALL {
            game.assert_blocked(dir);
        }
        game.assert_matches(level);
        assert_eq!(game.game_state.moves, 0);
    }

    #[test]
    fn when_box_pushed_into_wall_neither_moves() {
        let level = r#"
#.P@#
"#;
        let mut game = GameTestState::new(level);
        let update = game.assert_blocked(Right);

        assert_eq!(update, GameUpdate::Blocked(BlockReason::BoxAgainstWall));
        game.assert_matches(r#"
#.P@#
"#);
        assert_eq!(game.game_state.moves, 0);
    }

    #[test]
    fn leaving_the_grid_is_blocked() {
        // no wall on the edge, the rectangle itself is the boundary
        let level = r#"
P @.
"#;
        let mut game = GameTestState::new(level);
        game.assert_blocked(Left);
        game.assert_blocked(Up);
        game.assert_blocked(Down);

        game.assert_moves(&[Right, Right]);
        game.assert_matches("  P*");
        let update = game.assert_blocked(Right);
        assert_eq!(update, GameUpdate::Blocked(BlockReason::BoxAgainstWall));
    }

    #[test]
    fn short_rows_are_padded_with_floor() {
        let level = "#####\n#P\n#@. #\n#####";
        let mut game = GameTestState::new(level);
        game.assert_moves(&[Right, Right, Down]);
        game.assert_matches("#####\n#    \n#@.P#\n#####");
    }

    #[test]
    fn counter_counts_only_successful_moves() {
        let level = r#"
######
#P @.#
######
"#;
        let mut game = GameTestState::new(level);
        game.assert_blocked(Up);
        game.assert_move(Right);
        game.assert_blocked(Down);
        game.assert_move(Right);
        game.assert_move(Left);
        game.assert_move(Right);

        assert_eq!(game.game_state.moves, 4);
        game.assert_matches(r#"
######
#  P*#
######
"#);
    }

    #[test]
    fn push_onto_target_wins() {
        let mut game = GameTestState::new(r#"
#####
#P@.#
#####
"#);
        assert!(!game.game_state.is_won(&game.shared));
        game.assert_move(Right);
        assert!(game.game_state.is_won(&game.shared));
        game.assert_matches(r#"
#####
# P*#
#####
"#);
    }

    #[test]
    fn push_off_target_is_no_longer_won() {
        let mut game = GameTestState::new(r#"
######
#P*  #
######
"#);
        assert!(game.game_state.is_won(&game.shared));
        game.assert_move(Right);
        assert!(!game.game_state.is_won(&game.shared));
        game.assert_matches(r#"
######
# +@ #
######
"#);
    }

    #[test]
    fn player_and_box_never_overlap_or_enter_walls() {
        let mut game = GameTestState::new(crate::LEVEL);
        let pattern = [Up, Left, Up, Right, Right, Right, Down, Down, Left, Up, Up, Right, Down, Left];
        for _ in 0..5 {
            for &dir in &pattern {
                if let GameUpdate::NextState(next, _) = step(&game.shared, &game.game_state, dir) {
                    game.game_state = next;
                }
                let state = &game.game_state;
                assert_ne!(state.player, state.game_box);
                assert!(!game.shared.is_wall(state.player));
                assert!(!game.shared.is_wall(state.game_box));
            }
        }
    }
}
