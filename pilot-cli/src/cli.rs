// Command definition shared by the binary and build.rs (completions).
//
// Only clap may be used here: build.rs pulls this file in with `include!`.

use clap::{Arg, ArgAction, Command, ValueHint};

pub fn build_cli() -> Command {
    Command::new("formatpilot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert text between Markdown, HTML and LinkedIn-ready plain text")
        .long_about(
            "formatpilot rewrites a piece of text from one markup dialect into another.\n\n\
            Supported conversions:\n  \
            - markdown -> linkedin: plain text for LinkedIn posts\n  \
            - markdown -> html:     an HTML fragment\n  \
            - html -> markdown:     Markdown recovered from HTML\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override LinkedIn options for one run.\n  \
            Boolean flags can omit the value (defaults to 'true').\n  \
            Keys: char-limit, bold-style, bullet, flatten-tables, emoji, word-counts\n\n\
            Examples:\n  \
            formatpilot post.md --to linkedin                # Print LinkedIn text\n  \
            formatpilot post.md --to html -o post.html       # Write an HTML fragment\n  \
            cat page.html | formatpilot - --from html --to markdown"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and supported conversions")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print --list-formats output as JSON")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a formatpilot.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between formats (default command)")
                .long_about(
                    "Convert text between formats.\n\n\
                    Source formats: markdown (.md, .markdown), html (.html, .htm)\n\
                    Target formats: linkedin, html, markdown\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Use '-' as input to read from stdin; --from is then required.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    formatpilot convert post.md --to linkedin\n  \
                    formatpilot convert page.html --to markdown -o page.md\n  \
                    formatpilot post.md --to html                 # 'convert' is optional"
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: linkedin, html, markdown\n\
                            Use the format name, not the file extension."
                        )
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}
