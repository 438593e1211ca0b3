use crate::board::BoardState;
use anyhow::Result;
use std::io::{self, BufRead, Write};

pub struct UciHandler {
    board: BoardState,
}

impl UciHandler {
    pub fn new() -> Self {
        UciHandler {
            board: BoardState::new(),
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[cfg(test)]
    fn board_mut(&mut self) -> &mut BoardState {
        &mut self.board
    }

    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Reads commands until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, mut reader: R, mut writer: W) -> Result<()> {
        let mut buffer = Vec::new();

        // Raw bytes so a non-UTF-8 line is just another unknown command.
        while reader.read_until(b'\n', &mut buffer)? > 0 {
            let line = String::from_utf8_lossy(&buffer).into_owned();
            let command = line.trim();
            if command == "quit" {
                break;
            }

            let response = self.handle_command(command);
            if !response.is_empty() {
                writeln!(writer, "{}", response)?;
            }
            writer.flush()?;
            buffer.clear();
        }
        Ok(())
    }

    /// Returns the text to print for one trimmed command line, without a
    /// trailing newline. `quit` is handled by the loop.
    pub fn handle_command(&mut self, command: &str) -> String {
        match command {
            "uci" => self.handle_uci(),
            "isready" => "readyok".to_string(),
            "ucinewgame" => {
                self.board.reset();
                String::new()
            }
            "d" => self.board.render(),
            "" | "quit" => String::new(),
            _ => {
                eprintln!("Unknown command: '{}'", command);
                String::new()
            }
        }
    }

    fn handle_uci(&self) -> String {
        format!(
            "id name {} {}\nid author {}\nuciok",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_AUTHORS"),
        )
    }
}

impl Default for UciHandler {
    fn default() -> Self {
        Self::new()
    }
}
