use crate::core::{BlockReason, Direction, GameChangeType, GameState, GameUpdate, SharedGameState};

pub fn step(shared: &SharedGameState, game: &GameState, direction: Direction) -> GameUpdate {
    let dir = direction.delta();

    let next_player = game.player + dir;
    if shared.is_wall(next_player) {
        return GameUpdate::Blocked(BlockReason::Wall);
    }

    if next_player != game.game_box {
        return GameUpdate::NextState(
            GameState {
                player: next_player,
                game_box: game.game_box,
                moves: game.moves + 1,
            },
            GameChangeType::PlayerMove,
        );
    }

    // pushing: both move or neither does
    let next_box = game.game_box + dir;
    if shared.is_wall(next_box) {
        return GameUpdate::Blocked(BlockReason::BoxAgainstWall);
    }

    GameUpdate::NextState(
        GameState {
            player: next_player,
            game_box: next_box,
            moves: game.moves + 1,
        },
        GameChangeType::PlayerAndBoxMove,
    )
}
