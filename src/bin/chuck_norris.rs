use std::io::{self, BufRead, Write};

use chuck_norris_cipher::{decode_chuck_norris, encode_chuck_norris};

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    lines.next().and_then(|line| line.ok())
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    loop {
        writeln!(out, "Please input operation (encode/decode/exit):")?;
        let operation = match read_line(&mut lines) {
            Some(line) => line,
            None => break,
        };
        match operation.as_str() {
            "encode" => {
                writeln!(out, "Input string:")?;
                let input = read_line(&mut lines).unwrap_or_default();
                match encode_chuck_norris(&input) {
                    Ok(encoded) => {
                        writeln!(out, "Encoded string:")?;
                        writeln!(out, "{}", encoded)?;
                    }
                    Err(err) => writeln!(out, "{}", err)?,
                }
                writeln!(out)?;
            }
            "decode" => {
                writeln!(out, "Input encoded string:")?;
                let input = read_line(&mut lines).unwrap_or_default();
                match decode_chuck_norris(&input) {
                    Ok(decoded) => {
                        writeln!(out, "Decoded string:")?;
                        writeln!(out, "{}", decoded)?;
                    }
                    Err(_) => writeln!(out, "Encoded string is not valid.")?,
                }
                writeln!(out)?;
            }
            "exit" => {
                writeln!(out, "Bye!")?;
                break;
            }
            other => {
                writeln!(out, "There is no '{}' operation", other)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
