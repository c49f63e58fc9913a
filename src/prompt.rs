//! Prompt composition: embeds the structural index and the pending diff
//! into review and commit-message prompts.

/// Code-review prompt. The structural index, when available, gives the
/// model project-wide context the diff alone lacks.
pub fn review_prompt(index: Option<&str>, diff: &str) -> String {
    let mut prompt = String::from(
        "You are a code reviewer. Please review the following git diff and provide \
feedback on potential issues, bugs, improvements, or anything noteworthy. \
Focus on code quality, security, and best practices.\n",
    );

    if let Some(index) = index {
        prompt.push_str("\nProject structure:\n```\n");
        prompt.push_str(index);
        prompt.push_str("```\n");
    }

    prompt.push_str("\nDiff:\n```diff\n");
    prompt.push_str(diff);
    prompt.push_str(
        "```\n\nProvide your feedback in a concise and clear manner.\nFinish with recommendations.\n",
    );
    prompt
}

/// Commit-message prompt: first line is the main description, followed by
/// a flat list of at most three details.
pub fn commit_prompt(index: Option<&str>, diff: &str) -> String {
    let mut prompt = String::from(
        "You are a developer that writes good commit messages.\n\n\
The first line should be the main description of the changes.\n\
You can follow with a flat list of details, 3 at maximum.\n",
    );

    if let Some(index) = index {
        prompt.push_str("\nProject structure:\n```\n");
        prompt.push_str(index);
        prompt.push_str("```\n");
    }

    prompt.push_str("\nSuggest a commit message for the following diff:\n\nDiff:\n```diff\n");
    prompt.push_str(diff);
    prompt.push_str("```\n\nRespond only with the commit message, do not explain anything.\n");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_prompt_embeds_index_and_diff() {
        let prompt = review_prompt(Some("def greet(name):"), "diff --git a/x b/x");
        assert!(prompt.contains("Project structure:"));
        assert!(prompt.contains("def greet(name):"));
        assert!(prompt.contains("diff --git a/x b/x"));
        assert!(prompt.contains("recommendations"));
    }

    #[test]
    fn test_review_prompt_without_index() {
        let prompt = review_prompt(None, "diff --git a/x b/x");
        assert!(!prompt.contains("Project structure:"));
        assert!(prompt.contains("diff --git a/x b/x"));
    }

    #[test]
    fn test_commit_prompt_embeds_diff() {
        let prompt = commit_prompt(None, "diff --git a/x b/x");
        assert!(prompt.contains("commit message"));
        assert!(prompt.contains("diff --git a/x b/x"));
    }
}
