//! CLI Integration Tests
//!
//! Drives the `addrbook` binary against an isolated data directory.

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Helper to run CLI commands in an isolated data directory
struct CliTestContext {
    data_dir: TempDir,
}

impl CliTestContext {
    fn new() -> Self {
        Self {
            data_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_addrbook"));
        cmd.arg("--data-dir").arg(self.data_dir.path());
        cmd.env_remove("ADDRBOOK_FILE");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Run a CLI command and return the output
    fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .output()
            .expect("Failed to execute command")
    }

    /// Run a command and assert success
    fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        assert!(
            output.status.success(),
            "Command {:?} failed.\nStdout: {}\nStderr: {}",
            args,
            stdout,
            stderr
        );
        stdout
    }

    /// Run a command and assert failure
    fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        assert!(
            !output.status.success(),
            "Command {:?} should have failed but succeeded",
            args
        );
        stderr
    }

    /// Feed lines to `addrbook shell` and return its stdout
    fn shell(&self, input: &str) -> String {
        let mut child = self
            .command()
            .arg("shell")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn shell");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write to shell");

        let output = child.wait_with_output().expect("Failed to wait for shell");
        assert!(output.status.success(), "shell exited with failure");
        String::from_utf8_lossy(&output.stdout).to_string()
    }
}

// ===========================================================================
// Contact management
// ===========================================================================

#[test]
fn test_list_on_fresh_directory() {
    let ctx = CliTestContext::new();

    let stdout = ctx.run_success(&["list"]);

    assert!(stdout.contains("No contacts yet"));
}

#[test]
fn test_add_and_list_contact() {
    let ctx = CliTestContext::new();

    let stdout = ctx.run_success(&[
        "add",
        "John",
        "0501234567",
        "--birthday",
        "01-01-1990",
        "--email",
        "john@mail.com",
    ]);
    assert!(stdout.contains("Added contact: John"));

    let list = ctx.run_success(&["list"]);
    assert!(list.contains(
        "Name: John; Birthday: 01-01-1990; Phone: 0501234567 Email: john@mail.com"
    ));
}

#[test]
fn test_add_existing_contact_extends_it() {
    let ctx = CliTestContext::new();
    ctx.run_success(&["add", "John", "111"]);

    let stdout = ctx.run_success(&["add", "John", "222"]);
    assert!(stdout.contains("Updated contact: John"));

    let list = ctx.run_success(&["list"]);
    assert!(list.contains("Phone: 111, 222"));
}

#[test]
fn test_invalid_email_reports_format_message() {
    let ctx = CliTestContext::new();

    let stderr = ctx.run_failure(&["add", "John", "--email", "broken"]);

    assert!(stderr.contains("email must look like name@domain.com"));
    // Nothing was saved
    assert!(ctx.run_success(&["list"]).contains("No contacts yet"));
}

#[test]
fn test_unknown_contact_reports_lookup_message() {
    let ctx = CliTestContext::new();

    let stderr = ctx.run_failure(&["show", "Nobody"]);

    assert!(stderr.contains("User is not in contact list"));
}

#[test]
fn test_phone_changes_persist() {
    let ctx = CliTestContext::new();
    ctx.run_success(&["add", "Ann", "111"]);
    ctx.run_success(&["add-phone", "Ann", "222"]);

    let stdout = ctx.run_success(&["change", "Ann", "111", "333"]);
    assert!(stdout.contains("Phone 111 was successfully changed to 333"));

    let stdout = ctx.run_success(&["remove-phone", "Ann", "222"]);
    assert!(stdout.contains("Phone 222 was successfully removed from Ann"));

    let search = ctx.run_success(&["search", "ann"]);
    assert!(search.contains("Name: Ann Birthday: unknown Phone: 333"));
}

#[test]
fn test_search_by_phone_and_no_match() {
    let ctx = CliTestContext::new();
    ctx.run_success(&["add", "Bill", "0671112233"]);

    assert!(ctx.run_success(&["search", "1122"]).contains("Name: Bill"));
    assert!(ctx.run_success(&["search", "zzz"]).contains("No contacts matching 'zzz'"));
}

#[test]
fn test_show_displays_contact_card() {
    let ctx = CliTestContext::new();
    ctx.run_success(&["add", "Carol", "555"]);
    ctx.run_success(&["set-email", "Carol", "carol@site.org"]);
    ctx.run_success(&["set-birthday", "Carol", "24-12-1988"]);

    let stdout = ctx.run_success(&["show", "Carol"]);

    assert!(stdout.contains("Carol"));
    assert!(stdout.contains("555"));
    assert!(stdout.contains("carol@site.org"));
    assert!(stdout.contains("24-12-1988"));
}

#[test]
fn test_birthday_countdown() {
    let ctx = CliTestContext::new();
    ctx.run_success(&["add", "Dan"]);

    assert!(ctx
        .run_success(&["birthday", "Dan"])
        .contains("Dan's birthday is unknown"));

    ctx.run_success(&["set-birthday", "Dan", "15-06-1990"]);
    assert!(ctx
        .run_success(&["birthday", "Dan"])
        .contains("Dan's birthday will be in "));
}

#[test]
fn test_page_lists_first_block_or_all_pages() {
    let ctx = CliTestContext::new();
    for name in ["A1", "A2", "A3"] {
        ctx.run_success(&["add", name, "1"]);
    }

    let first = ctx.run_success(&["page", "2"]);
    assert_eq!(first, "A1 (B-day: unknown): 1\nA2 (B-day: unknown): 1\n");

    let all = ctx.run_success(&["page", "2", "--all"]);
    assert!(all.contains("Page 1:"));
    assert!(all.contains("Page 2:\nA3 (B-day: unknown): 1"));
}

#[test]
fn test_remove_contact() {
    let ctx = CliTestContext::new();
    ctx.run_success(&["add", "Eve", "1"]);

    assert!(ctx.run_success(&["remove", "Eve"]).contains("Removed contact: Eve"));
    assert!(ctx.run_success(&["remove", "Eve"]).contains("not found"));
}

#[test]
fn test_custom_file_name() {
    let ctx = CliTestContext::new();

    ctx.run_success(&["--file", "work.json", "add", "Boss", "1"]);

    assert!(ctx.data_dir.path().join("work.json").exists());
    assert!(ctx.run_success(&["list"]).contains("No contacts yet"));
}

// ===========================================================================
// vCard interchange
// ===========================================================================

#[test]
fn test_export_then_import_into_new_directory() {
    let source = CliTestContext::new();
    source.run_success(&["add", "Frank", "777", "--birthday", "02-03-1970"]);
    let vcf = source.data_dir.path().join("contacts.vcf");

    source.run_success(&["export", vcf.to_str().unwrap()]);

    let target = CliTestContext::new();
    let stdout = target.run_success(&["import", vcf.to_str().unwrap()]);
    assert!(stdout.contains("Imported 1 contact(s)"));
    assert!(target
        .run_success(&["list"])
        .contains("Name: Frank; Birthday: 02-03-1970; Phone: 777"));
}

// ===========================================================================
// Shell
// ===========================================================================

#[test]
fn test_shell_session_persists_changes() {
    let ctx = CliTestContext::new();

    let stdout = ctx.shell("hello\nadd John 111\nemail John john@mail.com\nshow all\ngood bye\n");

    assert!(stdout.contains("How can I help you?"));
    assert!(stdout.contains("Contact John was added"));
    assert!(stdout.contains("Name: John; Birthday: unknown; Phone: 111 Email: john@mail.com"));
    assert!(stdout.contains("Good bye!"));

    assert!(ctx.run_success(&["list"]).contains("Name: John"));
}

#[test]
fn test_shell_translates_errors_and_continues() {
    let ctx = CliTestContext::new();

    let stdout = ctx.shell("add\nphone Nobody\npage many\nadd Ann\nbirthday Ann 1990\nexit\n");

    assert!(stdout.contains("You didn't provide contact name or phone number"));
    assert!(stdout.contains("User is not in contact list"));
    assert!(stdout.contains("You didn't provide valid parameters"));
    assert!(stdout.contains("Contact Ann was added"));
    assert!(stdout.contains("Birthday must be in 'DD-MM-YYYY' format"));
}

#[test]
fn test_shell_saves_on_end_of_input() {
    let ctx = CliTestContext::new();

    ctx.shell("add Gina 42\n");

    assert!(ctx.run_success(&["search", "gina"]).contains("Phone: 42"));
}
