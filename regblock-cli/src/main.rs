use clap::{Parser, Subcommand};
use colored::Colorize;
use regblock::{
    BuildError, CompiledRegex, Constant, Options, Regex, capture, choice_of, escape_literal, one,
    one_or_more, optionally, regex, repeat,
};

#[derive(Parser)]
#[command(name = "regblock")]
#[command(about = "Regblock - build regex patterns from named components")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the bank statement sample and optionally run it
    Demo {
        /// Input text to search
        #[arg(short, long)]
        input: Option<String>,
        /// Show capture groups for each match
        #[arg(short, long)]
        verbose: bool,
    },
    /// Escape literal text for use in a pattern
    Escape {
        /// The text to escape
        text: String,
    },
    /// Build a repeat around literal text
    Repeat {
        /// The literal text to repeat
        text: String,
        /// Exact count
        #[arg(long, allow_negative_numbers = true)]
        count: Option<f64>,
        /// Lower bound
        #[arg(long, allow_negative_numbers = true)]
        from: Option<f64>,
        /// Upper bound
        #[arg(long, allow_negative_numbers = true)]
        to: Option<f64>,
        /// Match as few repetitions as possible
        #[arg(long)]
        lazy: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { input, verbose } => cmd_demo(input.as_deref(), verbose),
        Commands::Escape { text } => cmd_escape(&text),
        Commands::Repeat {
            text,
            count,
            from,
            to,
            lazy,
        } => cmd_repeat(&text, count, from, to, lazy),
    }
}

fn statement_pattern() -> Result<Regex, BuildError> {
    let date = regex![
        repeat![Options::new().from(1).to(3), one![Constant::Digit]]?,
        "/",
        repeat![Options::new().from(1).to(3), one![Constant::Digit]]?,
        "/",
        repeat![Options::new().count(4), one![Constant::Digit]]?,
    ];

    Ok(regex![
        capture![Options::new().name("name"), choice_of!["CREDIT", "DEBIT"]],
        optionally![one_or_more![Constant::Whitespace]],
        capture![date],
    ]
    .returns_all_matches()
    .anchors_match_line_endings()
    .ignores_case())
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), e);
    std::process::exit(1);
}

fn cmd_demo(input: Option<&str>, verbose: bool) {
    let re = statement_pattern().unwrap_or_else(|e| fail(e));

    println!("{}", "Statement pattern".bold());
    println!("  Pattern:   {}", re.to_pattern().cyan());
    println!("  Flags:     {}", re.flags_string().yellow());
    println!("  Delimited: {}", re.to_delimited());

    let Some(input) = input else {
        return;
    };

    let compiled = re.build().unwrap_or_else(|e| fail(e));
    println!();
    print_matches(&compiled, input, verbose);
}

fn print_matches(compiled: &CompiledRegex, input: &str, verbose: bool) {
    let matches = compiled.find_all(input);

    if matches.is_empty() {
        println!("{}", "No matches found".red());
        return;
    }

    println!(
        "{} {}",
        "Found".bold(),
        format!("{} match(es)", matches.len()).green()
    );

    for (i, m) in matches.iter().enumerate() {
        println!(
            "  [{}] {}..{} = {}",
            i + 1,
            m.start,
            m.end,
            m.text(input).green()
        );

        if !verbose {
            continue;
        }
        let Some(caps) = compiled.captures_at(input, m.start) else {
            continue;
        };
        let mut groups: Vec<_> = caps.groups.iter().collect();
        groups.sort();
        for (idx, &(start, end)) in groups {
            println!(
                "      Group {}: {}..{} = {}",
                idx,
                start,
                end,
                input[start..end].green()
            );
        }
        for (name, (start, end)) in &caps.named_groups {
            println!("      Group <{}>: {}..{}", name.cyan(), start, end);
        }
    }
}

fn cmd_escape(text: &str) {
    println!("{}", escape_literal(text).green());
}

fn cmd_repeat(text: &str, count: Option<f64>, from: Option<f64>, to: Option<f64>, lazy: bool) {
    let options = Options {
        count,
        from,
        to,
        lazy,
        ..Options::default()
    };

    match repeat![options, text] {
        Ok(block) => println!("{}", block.render().green()),
        Err(e) => fail(e),
    }
}
