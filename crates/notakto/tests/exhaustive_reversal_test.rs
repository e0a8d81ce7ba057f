//! Exhaustive checks of computer play over small positions.

use notakto::{
    Board, MoveSelector, NotaktoErrorKind, Position, human_move, is_dead, is_game_over,
    is_losing_for_mover, select_from,
};
use std::collections::{BTreeSet, VecDeque};

/// Every board reachable from an empty board by marking squares of live boards.
fn reachable_boards() -> Vec<Board> {
    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::from([Board::new().to_string()]);
    seen.insert(Board::new().to_string());

    while let Some(encoded) = queue.pop_front() {
        let board: Board = encoded.parse().unwrap();
        if is_dead(&board) {
            continue;
        }
        for cell in board.empty_cells() {
            let position = Position::from_boards(vec![board.clone()]).unwrap();
            let next = human_move(&position, 0, cell.to_index()).unwrap();
            let next = next.board(0).unwrap().to_string();
            if seen.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }

    seen.into_iter().map(|s| s.parse().unwrap()).collect()
}

fn check_reply(position: &Position, start: usize) {
    let was_losing = is_losing_for_mover(position);
    let reply = select_from(position, start)
        .unwrap_or_else(|err| panic!("no reply for {}: {}", position, err));

    let mov = *reply.played();
    let target = position.board(mov.board).unwrap();
    assert!(!is_dead(target), "{}: played on dead board", position);
    assert!(target.is_empty(mov.cell), "{}: played on marked square", position);

    if !was_losing {
        assert!(
            is_losing_for_mover(reply.position()),
            "{}: reply {} does not reverse the position",
            position,
            reply.position()
        );
        assert!(reply.leaves_opponent_lost());
    } else {
        assert!(!reply.leaves_opponent_lost());
    }
}

#[test]
fn test_reachable_board_count() {
    let boards = reachable_boards();
    assert_eq!(boards.len(), 450);
    assert_eq!(boards.iter().filter(|b| !is_dead(b)).count(), 230);
}

#[test]
fn test_every_single_board_position_reverses() {
    for board in reachable_boards() {
        let position = Position::from_boards(vec![board]).unwrap();
        if is_game_over(&position) {
            continue;
        }
        for start in 0..9 {
            check_reply(&position, start);
        }
    }
}

#[test]
fn test_every_two_board_position_reverses() {
    let boards = reachable_boards();
    for first in &boards {
        for second in &boards {
            let position = Position::from_boards(vec![first.clone(), second.clone()]).unwrap();
            if is_game_over(&position) {
                continue;
            }
            check_reply(&position, 0);
        }
    }
}

#[test]
fn test_random_replies_are_legal() {
    let boards = reachable_boards();
    let mut selector = MoveSelector::seeded(99);
    for (i, first) in boards.iter().enumerate().step_by(7) {
        let second = &boards[(i * 31) % boards.len()];
        let position = Position::from_boards(vec![first.clone(), second.clone()]).unwrap();
        if is_game_over(&position) {
            let err = selector.select(&position).unwrap_err();
            assert_eq!(err.kind(), &NotaktoErrorKind::GameOver);
            continue;
        }
        let reply = selector.select(&position).unwrap();
        let mov = *reply.played();
        let target = position.board(mov.board).unwrap();
        assert!(!is_dead(target));
        assert!(target.is_empty(mov.cell));
        assert_eq!(reply.position().board(1 - mov.board), position.board(1 - mov.board));
    }
}
