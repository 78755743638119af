// Terminal stand-in for the graphical viewer: stdin plays the mouse.

use boardwalk::{board::PrettyStyle, BoardMetrics, Point, PointerEvent, Viewer};
use std::io::{self, BufRead, Write};

const BOARD_SIZE: u32 = 512;

fn parse_point(mut words: std::str::SplitWhitespace<'_>) -> Option<Point> {
    let x = words.next()?.parse().ok()?;
    let y = words.next()?.parse().ok()?;
    if words.next().is_some() {
        return None;
    }
    Some(Point::new(x, y))
}

fn main() {
    let mut stdin = io::stdin().lock();
    let mut viewer = Viewer::new(BoardMetrics::from_board_size(BOARD_SIZE));

    println!(
        "boardwalk viewer, {0}x{0} px board ({1} px squares)",
        viewer.metrics().board_size(),
        viewer.metrics().square_size()
    );

    loop {
        println!("{}", viewer.board().pretty(PrettyStyle::Ascii));
        if let Some(piece) = viewer.drag().piece() {
            println!(
                "carrying {} from {}",
                piece,
                viewer.drag().origin().unwrap()
            );
        }
        print!("> ");
        io::stdout().flush().unwrap();

        let mut s = String::new();
        if stdin.read_line(&mut s).unwrap() == 0 {
            break;
        }
        let mut words = s.split_whitespace();

        match words.next() {
            Some("down") => {
                let pos = match parse_point(words) {
                    Some(p) => p,
                    None => {
                        println!("usage: down <x> <y>");
                        continue;
                    }
                };
                viewer.apply(PointerEvent::Down(pos));
            }
            Some("up") => {
                let pos = match parse_point(words) {
                    Some(p) => p,
                    None => {
                        println!("usage: up <x> <y>");
                        continue;
                    }
                };
                if let Some(applied) = viewer.apply(PointerEvent::Up(pos)) {
                    if applied.taken.is_occupied() {
                        println!(
                            "{} {}{}, takes {}",
                            applied.piece, applied.from, applied.to, applied.taken
                        );
                    } else {
                        println!("{} {}{}", applied.piece, applied.from, applied.to);
                    }
                }
            }
            Some("reset") => viewer.reset(),
            Some("quit") => break,
            Some(_) => println!("commands: down <x> <y>, up <x> <y>, reset, quit"),
            None => {}
        }
        println!();
    }
}
