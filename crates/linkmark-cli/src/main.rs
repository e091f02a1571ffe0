use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use linkmark_core::{Link, LinkFinder, LinkKind, render_html, render_html_sanitized};

fn main() {
    let mut input: Option<String> = None;
    let mut html = false;
    let mut sanitized = false;
    let mut allow_without_scheme = false;
    let mut check = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--html" => html = true,
            "--sanitized" => {
                html = true;
                sanitized = true;
            }
            "--allow-without-scheme" => allow_without_scheme = true,
            "--check" => check = true,
            _ => {
                if input.is_none() {
                    input = Some(arg);
                } else {
                    eprintln!("unexpected argument: {}", arg);
                    print_usage();
                    process::exit(2);
                }
            }
        }
    }

    let source = match input {
        Some(path) => fs::read_to_string(&path).unwrap_or_else(|err| {
            eprintln!("failed to read {}: {}", path, err);
            process::exit(1);
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|err| {
                    eprintln!("failed to read stdin: {}", err);
                    process::exit(1);
                });
            buffer
        }
    };

    let mut finder = LinkFinder::new();
    finder.allow_without_scheme(allow_without_scheme);

    if html {
        let rendered = if sanitized {
            render_html_sanitized(&source, &finder)
        } else {
            render_html(&source, &finder)
        };
        print!("{}", rendered);
        return;
    }

    let mut invalid = 0usize;
    for link in finder.links(&source) {
        println!("{}", link.as_str());
        if check {
            let href = href_for(&link);
            if let Err(err) = url::Url::parse(&href) {
                eprintln!("invalid link {}: {}", link.as_str(), err);
                invalid += 1;
            }
        }
    }

    if invalid > 0 {
        process::exit(1);
    }
}

fn href_for(link: &Link<'_>) -> String {
    match link.kind() {
        LinkKind::Email => format!("mailto:{}", link.as_str()),
        LinkKind::Domain => format!("https://{}", link.as_str()),
        _ => link.as_str().to_string(),
    }
}

fn print_usage() {
    eprintln!(
        "Usage: linkmark-cli [--html] [--sanitized] [--allow-without-scheme] [--check] [input]"
    );
}
