//! Built-in prompt templates. Placeholders use `{{NAME}}` and are filled by
//! [`super::interpolate`].

pub const AUDIT_SYSTEM: &str = "You are a senior software architect reviewing student and early-career projects. \
Be critical but constructive, and ground every remark in the files you are shown.";

pub const AUDIT_TEMPLATE: &str = r#"Review the GitHub repository below and produce a score, a summary and a personalized roadmap.

REPOSITORY
Name: {{REPO_NAME}}
Owner: {{OWNER}}
Description: {{DESCRIPTION}}
Stars: {{STARS}}

FILE STRUCTURE
{{FILE_TREE}}

KEY FILES
{{KEY_FILES}}

Judge structure, code quality, documentation and engineering practices (tests, CI, dependency manifests, .gitignore).

Answer in Markdown using exactly this layout:

## 📊 Score: <0-100>/100

## 📝 Executive Summary
<two or three sentences on purpose, stack and overall quality; say whether it is "Hireable" or "Needs Work">

## 🔍 Deep Dive Analysis
* **Structure & Organization:** <folder layout and modularity>
* **Code Quality:** <readability, complexity, linting>
* **Documentation:** <README and comments>
* **Best Practices:** <tests, CI/CD, ignore files, manifests>

## 🗺️ Personalized Roadmap
1. <step specific to this project>
2. <step specific to this project>
3. <step specific to this project>
4. <step specific to this project>
"#;

pub const README_SYSTEM: &str = "You are a technical writer who produces clear, accurate project READMEs.";

pub const README_TEMPLATE: &str = r#"Write a complete README.md for the repository {{OWNER}}/{{REPO_NAME}}.

Description: {{DESCRIPTION}}

FILE STRUCTURE
{{FILE_TREE}}

KEY FILES
{{KEY_FILES}}

Include a title, a one-paragraph overview, features, installation, usage with examples, project layout and a contributing section.
Only describe behaviour you can infer from the files above. Output the README as Markdown and nothing else.
"#;

pub const UNIT_TESTS_SYSTEM: &str = "You are a senior engineer who writes focused, idiomatic unit tests.";

pub const UNIT_TESTS_TEMPLATE: &str = r#"Write a unit test file for the repository {{OWNER}}/{{REPO_NAME}}.

FILE STRUCTURE
{{FILE_TREE}}

KEY FILES
{{KEY_FILES}}

Pick the main entry point shown above, use the test framework conventional for its language, and cover the happy path plus at least two edge cases.
Start with a one-line comment naming the file path the tests belong in, then output only the code in a single fenced block.
"#;
