//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an ssmenv command with an isolated environment.
    ///
    /// - HOME points at the temporary home directory
    /// - AWS credential, region and ENV variables are cleared
    /// - the working directory is the test project directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("ssmenv").expect("failed to find ssmenv binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        for var in [
            "AWS_ACCESS_KEY_ID",
            "AWS_SECRET_ACCESS_KEY",
            "AWS_DEFAULT_REGION",
            "ENV",
            "SSMENV_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run ssmenv with `args`.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run ssmenv")
    }

    /// Shortcut for `ssmenv get`.
    pub fn get(&self, args: &[&str]) -> Output {
        let mut full = vec!["get"];
        full.extend_from_slice(args);
        self.run(&full)
    }

    /// Shortcut for `ssmenv set`.
    pub fn set(&self, args: &[&str]) -> Output {
        let mut full = vec!["set"];
        full.extend_from_slice(args);
        self.run(&full)
    }

    /// Shortcut for `ssmenv populate`.
    pub fn populate(&self, args: &[&str]) -> Output {
        let mut full = vec!["populate"];
        full.extend_from_slice(args);
        self.run(&full)
    }
}
