//! Command-line interface for swan
//! This binary builds the showcase page and prints or writes the generated HTML/JS.
//!
//! Usage:
//!   swan demo [--out `<dir>`] [--slug `<slug>`] [--format `<format>`]  - Build the showcase page
//!   swan void-tags                                                 - List the self-closing tag set

use clap::{Arg, Command};
use std::path::PathBuf;

use swan::element::Child;
use swan::literal::{self, LitValue};
use swan::render::{render, RenderOptions};
use swan::tags::{button, div, img, li, p, span, ul, void_tags};
use swan::{attrs, children, Node};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let matches = Command::new("swan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for generating HTML and JS pages with a component-like syntax")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Build the showcase page")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .help("Write output files to this directory instead of printing"),
                )
                .arg(
                    Arg::new("slug")
                        .long("slug")
                        .help("Page slug used for output file names")
                        .default_value("/"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Print format when --out is not given ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(Command::new("void-tags").about("List the self-closing tag set"))
        .get_matches();

    match matches.subcommand() {
        Some(("demo", demo_matches)) => {
            let out = demo_matches.get_one::<String>("out");
            let slug = demo_matches.get_one::<String>("slug").unwrap();
            let format = demo_matches.get_one::<String>("format").unwrap();
            handle_demo_command(out, slug, format).await;
        }
        Some(("void-tags", _)) => {
            handle_void_tags_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the demo command
async fn handle_demo_command(out: Option<&String>, slug: &str, format: &str) {
    let page = demo_page();

    match out {
        Some(dir) => {
            let options = RenderOptions {
                out_dir: PathBuf::from(dir),
                slug: slug.to_string(),
                html: page.html,
                js: page.js,
            };
            if let Err(e) = render(&options).await {
                eprintln!("Error writing output: {}", e);
                std::process::exit(1);
            }
        }
        None => match format {
            "json" => {
                let json = serde_json::to_string_pretty(&page).unwrap_or_else(|e| {
                    eprintln!("Serialization error: {}", e);
                    std::process::exit(1);
                });
                println!("{}", json);
            }
            "text" => {
                println!("HTML:");
                println!("{}", page.html);
                println!("\nJavaScript:");
                println!("{}", page.js);
            }
            other => {
                eprintln!("Unknown format: {}", other);
                std::process::exit(1);
            }
        },
    }
}

/// Handle the void-tags command
fn handle_void_tags_command() {
    for tag in void_tags() {
        println!("{}", tag);
    }
}

/// Assemble the showcase page: nested content, a click handler, conditional
/// rendering and a generated list with per-item handlers.
fn demo_page() -> Node {
    let is_admin = true;
    let user_list = ["Alice", "Bob", "Charlie", "David"];
    let message_count = 5;

    div(
        attrs! { "id" => "app", "class" => "p-4" },
        children![
            div(
                attrs! { "id" => "child", "class" => "bg-white" },
                children![
                    "Hello, world!",
                    button(
                        attrs! { "onclick" => "console.log(\"clicked\", e);" },
                        children![
                            "Click me",
                            img(attrs! { "src" => "test.svg", "alt" => "" }, children![]),
                        ],
                    ),
                ],
            ),
            // Conditional rendering
            Child::when(is_admin, || {
                div(
                    attrs! { "class" => "admin_panel" },
                    children![
                        icon(None, "*"),
                        "Admin Panel",
                        p(
                            attrs! { "class" => "admin_message" },
                            children![format!("You have {message_count} new messages")],
                        ),
                    ],
                )
            }),
            // List rendering from an iterator
            ul(
                attrs! { "class" => "user_list" },
                children![user_list
                    .iter()
                    .enumerate()
                    .map(|(index, user_name)| user_item(index, user_name))
                    .collect::<Child>()],
            ),
        ],
    )
}

/// One entry of the user list, with a handler logging the selected user.
fn user_item(index: usize, user_name: &str) -> Node {
    let handler = literal::quoted(
        &["console.log(\"Selected user:\", ", ");console.log(", ");"],
        &[
            Some(LitValue::from(user_name)),
            Some(LitValue::from(format!("Hello, {user_name}!"))),
        ],
    );

    li(
        attrs! { "class" => "user_item", "onclick" => handler },
        children![
            format!("{}. {}", index + 1, user_name),
            Child::when(index % 2 == 0, || {
                img(
                    attrs! {
                        "src" => "verified.svg",
                        "alt" => "verified user",
                        "class" => "verified_badge",
                    },
                    children![],
                )
            }),
        ],
    )
}

/// Icon component: a span with fixed sizing classes wrapping an icon glyph.
fn icon(extra_class: Option<&str>, glyph: &str) -> Node {
    let class = match extra_class {
        Some(extra) => format!("icon {extra} w-[1em] h-[1em]"),
        None => "icon w-[1em] h-[1em]".to_string(),
    };
    span(
        attrs! { "class" => class, "aria-hidden" => "true" },
        children![glyph],
    )
}
