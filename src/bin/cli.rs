use chive::hex::HexCoord;
use chive::{Color, HiveGame, Move};
use clap::Parser;
use std::io::BufRead;
use thiserror::Error;

#[derive(Parser, Debug)]
struct Args {
    /// Read commands from a file instead of stdin.
    #[arg(long)]
    script: Option<std::path::PathBuf>,
}

#[derive(Error, Debug)]
enum ParseError {
    #[error("empty line")]
    Empty,
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("{command} expects {expected} arguments, got {got}")]
    WrongArity { command: String, expected: usize, got: usize },
    #[error("{0:?} is not a valid integer")]
    NotAnInteger(String),
    #[error("{0} is not a known piece id")]
    UnknownPiece(usize),
}

enum Command {
    Apply(Move),
    ListMoves,
    ShowBoard,
}

fn parse_line(line: &str, game: &HiveGame) -> Result<Command, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (command, args) = tokens.split_first().ok_or(ParseError::Empty)?;

    let parse_int = |s: &str| s.parse::<i32>().map_err(|_| ParseError::NotAnInteger(s.to_string()));
    let parse_piece_id = |s: &str, game: &HiveGame| -> Result<usize, ParseError> {
        let id = s.parse::<usize>().map_err(|_| ParseError::NotAnInteger(s.to_string()))?;
        if id >= game.pieces().len() {
            return Err(ParseError::UnknownPiece(id));
        }
        Ok(id)
    };

    match *command {
        "place" => {
            if args.len() != 3 {
                return Err(ParseError::WrongArity {
                    command: "place".to_string(),
                    expected: 3,
                    got: args.len(),
                });
            }
            let piece_id = parse_piece_id(args[0], game)?;
            let to = HexCoord { q: parse_int(args[1])?, r: parse_int(args[2])? };
            Ok(Command::Apply(Move::Place { piece_id, to }))
        }
        "move" => {
            if args.len() != 3 {
                return Err(ParseError::WrongArity {
                    command: "move".to_string(),
                    expected: 3,
                    got: args.len(),
                });
            }
            let piece_id = parse_piece_id(args[0], game)?;
            let to = HexCoord { q: parse_int(args[1])?, r: parse_int(args[2])? };
            let from = game.piece(piece_id).coord;
            Ok(Command::Apply(Move::Move { piece_id, from, to, path: vec![] }))
        }
        "pass" => Ok(Command::Apply(Move::Pass)),
        "moves" => Ok(Command::ListMoves),
        "board" => Ok(Command::ShowBoard),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn describe(mv: &Move, game: &HiveGame) -> String {
    match mv {
        Move::Place { piece_id, to } => {
            format!("place {} ({}, {}) at ({}, {})", piece_id, game.piece(*piece_id).piece_type, game.piece(*piece_id).owner, to.q, to.r)
        }
        Move::Move { piece_id, from, to, .. } => format!(
            "move {} ({}) from ({}, {}) to ({}, {})",
            piece_id,
            game.piece(*piece_id).piece_type,
            from.q,
            from.r,
            to.q,
            to.r
        ),
        Move::Pass => "pass".to_string(),
    }
}

fn print_board(game: &HiveGame) {
    let mut coords: Vec<_> = game.board().occupied_coords().copied().collect();
    coords.sort_by_key(|c| (c.q, c.r));
    if coords.is_empty() {
        println!("(empty board)");
        return;
    }
    for coord in coords {
        let labels: Vec<String> = game
            .board()
            .stack_at(&coord)
            .iter()
            .map(|&id| {
                let piece = game.piece(id);
                let owner = if piece.owner == Color::White { "w" } else { "b" };
                format!("{owner}{}", piece.piece_type.label())
            })
            .collect();
        println!("({:>3}, {:>3}): {}", coord.q, coord.r, labels.join(" < "));
    }
}

fn print_result(game: &HiveGame) {
    match (game.is_draw(), game.winner()) {
        (true, _) => println!("game over: draw"),
        (_, Some(winner)) => println!("game over: {winner} wins"),
        (_, None) => {}
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::info!("chive cli starting");

    let mut game = HiveGame::new();

    let input: Box<dyn std::io::Read> = match &args.script {
        Some(path) => match std::fs::File::open(path) {
            Ok(file) => Box::new(file),
            Err(err) => {
                log::error!("could not open {}: {err}", path.display());
                std::process::exit(1);
            }
        },
        None => Box::new(std::io::stdin()),
    };

    for line in std::io::BufReader::new(input).lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::error!("error reading input: {err}");
                break;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if game.is_game_over() {
            log::info!("game is over, ignoring further input");
            break;
        }

        match parse_line(trimmed, &game) {
            Ok(Command::ListMoves) => {
                for mv in game.legal_moves() {
                    println!("{}", describe(&mv, &game));
                }
            }
            Ok(Command::ShowBoard) => print_board(&game),
            Ok(Command::Apply(mv)) => {
                if game.apply_move(&mv) {
                    log::info!("applied: {}", describe(&mv, &game));
                    print_result(&game);
                } else {
                    log::error!("rejected (not a legal move): {trimmed}");
                }
            }
            Err(err) => log::error!("could not parse {trimmed:?}: {err}"),
        }
    }

    print_board(&game);
}
