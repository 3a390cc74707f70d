use clap::Parser;
use std::io::Read;

use memsh::{Shell, ShellOptions};

#[derive(Parser)]
#[command(name = "memsh")]
#[command(about = "An in-memory filesystem shell")]
#[command(version)]
struct Cli {
    /// Execute the script from command line argument
    #[arg(short = 'c')]
    script: Option<String>,

    /// Output results as JSON (stdout, stderr, exitCode)
    #[arg(long = "json")]
    json: bool,

    /// Script file to execute
    #[arg()]
    script_file: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Determine script source: -c, file, or stdin
    let script = if let Some(s) = cli.script {
        s
    } else if let Some(ref file) = cli.script_file {
        match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("memsh: {}: {}", file, e);
                std::process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("memsh: failed to read stdin: {}", e);
            std::process::exit(1);
        }
        buf
    };

    let shell = Shell::new(ShellOptions::default());
    let result = shell.exec(&script).await;

    if cli.json {
        match serde_json::to_string(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("memsh: failed to serialize result: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", result.stdout);
        eprint!("{}", result.stderr);
    }

    std::process::exit(result.exit_code);
}
