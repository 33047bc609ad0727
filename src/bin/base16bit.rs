/*
 * Copyright (C) 2026 The base16bit Developers
 *
 * This file is part of base16bit.
 *
 * base16bit is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * base16bit is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with base16bit. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fmt::{Debug, Display};
use std::fs::File;
use std::io::{stdin, stdout, Read, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

use base16bit::{standard, DecodeConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Encodes or decodes base16bit data from [FILE] and writes the result to
/// standard output. If [FILE] is missing or "-", the data is read from
/// standard input.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Decode data instead of encoding
    #[arg(short, long, env = "BASE16BIT_DECODE")]
    decode: bool,
    /// When decoding, stop at the first malformed character instead of
    /// failing
    #[arg(long, env = "BASE16BIT_RELAXED")]
    relaxed: bool,
    /// Print the symbol alphabet and exit
    #[arg(long, conflicts_with_all = ["decode", "file"])]
    alphabet: bool,
    /// Input file
    file: Option<PathBuf>,
}

#[macro_use]
mod error_exit {
    use super::{exit, Display};

    macro_rules! error_exit {
        ($($args:tt)*) => {
            crate::error_exit::__run(format_args!($($args)*));
        };
    }

    #[doc(hidden)]
    pub fn __run(args: impl Display) -> ! {
        eprintln!("error: {}", args);
        if cfg!(feature = "cli-panic") {
            panic!("error: {}", args);
        } else {
            exit(1);
        }
    }
}

fn expect<T, E: Debug>(result: Result<T, E>, msg: impl Display) -> T {
    result.unwrap_or_else(|e| {
        tracing::debug!(error = ?e, "{}", msg);
        error_exit!("{}", msg);
    })
}

fn read_input(path: Option<&Path>) -> Vec<u8> {
    let mut data = Vec::new();
    match path.filter(|p| p.as_os_str() != "-") {
        Some(path) => {
            let mut file = File::open(path).unwrap_or_else(|e| {
                error_exit!("could not open file '{}': {}", path.display(), e);
            });
            expect(file.read_to_end(&mut data), "could not read input");
        }
        None => {
            expect(
                stdin().lock().read_to_end(&mut data),
                "could not read input",
            );
        }
    }
    tracing::debug!(bytes = data.len(), "read input");
    data
}

fn write_output(data: &[u8]) {
    let mut out = stdout().lock();
    expect(out.write_all(data), "could not write to standard output");
    expect(out.flush(), "could not write to standard output");
}

fn encode(data: &[u8]) {
    match standard().encode_to_string(data) {
        Ok(s) => write_output(s.as_bytes()),
        Err(e) => {
            error_exit!("could not encode input: {}", e);
        }
    }
}

fn decode(data: Vec<u8>, config: DecodeConfig) {
    let text = String::from_utf8(data).unwrap_or_else(|e| {
        error_exit!("input is not valid UTF-8: {}", e);
    });
    // Whitespace is never part of the alphabet.
    match standard().decode_to_vec_with(text.trim_end(), config) {
        Ok(bytes) => write_output(&bytes),
        Err(e) => {
            error_exit!("input is not valid base16bit data: {}", e);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.alphabet {
        write_output(standard().alphabet().to_string().as_bytes());
        return;
    }

    let data = read_input(args.file.as_deref());
    if args.decode {
        let mut config = DecodeConfig::new();
        config.relaxed = args.relaxed;
        decode(data, config);
    } else {
        encode(&data);
    }
}
