//! Terminal credential prompts.

use std::path::Path;

use dialoguer::{Input, Password};

use crate::cli::output;
use crate::core::credentials::Prompter;
use crate::error::Result;

const GUIDANCE: &str = "\
No AWS credentials found. Create an access key for an IAM user that can
read and write SSM parameters:

  1. Open the IAM console and select (or create) your user
  2. Attach a policy allowing ssm:GetParameter, ssm:GetParameters and
     ssm:PutParameter, plus kms:Decrypt for SecureString values
  3. Under Security credentials, choose Create access key
";

/// Prompts on the controlling terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn guidance(&self) {
        output::info(GUIDANCE);
    }

    fn input(&self, prompt: &str) -> Result<String> {
        Ok(Input::<String>::new().with_prompt(prompt).interact_text()?)
    }

    fn password(&self, prompt: &str) -> Result<String> {
        Ok(Password::new().with_prompt(prompt).interact()?)
    }

    fn stored(&self, path: &Path) {
        output::success(&format!("Credentials saved to {}", output::path(path.display())));
    }
}
