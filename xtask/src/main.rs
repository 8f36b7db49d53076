use std::env;
use std::path::Path;
use std::process::{Command, ExitCode};

fn cargo(root: &Path, args: &[&str]) -> Result<(), String> {
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    let shown = format!("cargo {}", args.join(" "));
    let status = Command::new(cargo)
        .args(args)
        .current_dir(root)
        .status()
        .map_err(|e| format!("failed to run `{shown}`: {e}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("command failed: {shown}"))
    }
}

fn main() -> ExitCode {
    let arg = env::args().nth(1).unwrap_or_else(|| "help".to_string());
    let Some(root) = Path::new(env!("CARGO_MANIFEST_DIR")).parent() else {
        eprintln!("xtask must live inside the workspace");
        return ExitCode::FAILURE;
    };

    let result = match arg.as_str() {
        "fmt" => cargo(root, &["fmt", "--all", "--", "--check"]),
        "lint" => cargo(
            root,
            &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        ),
        "test" => cargo(root, &["test", "--workspace"]),
        "ci" => cargo(root, &["fmt", "--all", "--", "--check"])
            .and_then(|()| {
                cargo(
                    root,
                    &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
                )
            })
            .and_then(|()| cargo(root, &["test", "--workspace"])),
        "help" | "--help" | "-h" => {
            eprintln!("xtask commands:");
            eprintln!("  fmt    check formatting");
            eprintln!("  lint   clippy with warnings denied");
            eprintln!("  test   run the workspace tests");
            eprintln!("  ci     fmt, lint and test in order");
            Ok(())
        }
        _ => Err(format!(
            "unknown xtask command: {arg} (try `cargo run -p xtask -- help`)"
        )),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
