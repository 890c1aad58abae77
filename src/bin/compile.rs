//! Compile a learner profile into a role-play system prompt from the shell.
//!
//! ```bash
//! compile --archetype silent-struggler --domain Algebra --topic "Linear equations"
//! compile --profile learner.yaml --json
//! compile --archetype esl-learner --section innerMonologue
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use synthetic_learner::persona::find_archetype;
use synthetic_learner::store::{load_profile_file, KnowledgeStatePatch, ProfilePatch, ProfileStore};
use synthetic_learner::types::{LearnerProfile, PersonaResponse, PromptSections};

#[derive(Parser)]
#[command(name = "compile")]
#[command(about = "Compile a learner profile into a synthetic-learner system prompt", long_about = None)]
struct Cli {
    /// JSON or YAML profile file
    #[arg(short, long, conflicts_with = "archetype")]
    profile: Option<PathBuf>,

    /// Seed the profile from an archetype id (e.g. confident-but-wrong)
    #[arg(short, long)]
    archetype: Option<String>,

    /// Override the learner's name
    #[arg(long)]
    name: Option<String>,

    /// Override the subject domain
    #[arg(long)]
    domain: Option<String>,

    /// Override the topic
    #[arg(long)]
    topic: Option<String>,

    /// Override the misconceptions
    #[arg(long)]
    misconceptions: Option<String>,

    /// Print the full response (prompt and sections) as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Print a single section by key (e.g. escapeValves)
    #[arg(long, conflicts_with = "json")]
    section: Option<String>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

impl Cli {
    fn base_profile(&self) -> anyhow::Result<LearnerProfile> {
        if let Some(path) = &self.profile {
            return load_profile_file(path)
                .with_context(|| format!("Failed to load profile {}", path.display()));
        }
        match &self.archetype {
            Some(id) => match find_archetype(id) {
                Some(archetype) => Ok(archetype.seed_profile()),
                None => bail!("Unknown archetype: {id}"),
            },
            None => Ok(LearnerProfile::new()),
        }
    }

    /// Flag overrides as a profile edit.
    fn overrides(&self) -> ProfilePatch {
        let knowledge = KnowledgeStatePatch {
            domain: self.domain.clone(),
            topic: self.topic.clone(),
            misconceptions: self.misconceptions.clone(),
            ..Default::default()
        };
        ProfilePatch {
            name: self.name.clone(),
            knowledge_state: Some(knowledge),
            ..Default::default()
        }
    }

    fn compile(&self) -> anyhow::Result<PersonaResponse> {
        let mut store = ProfileStore::with_profile(self.base_profile()?);
        store.apply(self.overrides());
        Ok(store.compile().clone())
    }

    /// Text to print for `response`.
    fn render(&self, response: &PersonaResponse) -> anyhow::Result<String> {
        if self.json {
            return Ok(serde_json::to_string_pretty(response)?);
        }
        match &self.section {
            Some(key) => match response.prompt_sections.get(key) {
                Some(block) => Ok(block.to_string()),
                None => bail!(
                    "Unknown section {key}; expected one of: {}",
                    PromptSections::KEYS.join(", ")
                ),
            },
            None => Ok(response.system_prompt.clone()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    }

    let response = cli.compile()?;
    println!("{}", cli.render(&response)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("compile").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_overrides_reach_the_prompt() {
        let cli = cli(&[
            "--archetype",
            "silent-struggler",
            "--name",
            "Priya",
            "--domain",
            "Algebra",
            "--topic",
            "Linear equations",
            "--misconceptions",
            "The variable is always x",
        ]);
        let response = cli.compile().unwrap();

        assert!(response.system_prompt.contains("You are Priya studying Algebra."));
        assert!(response.system_prompt.contains("silent-struggler"));
        let knowledge = &response.prompt_sections.knowledge_state;
        assert!(knowledge.contains("Linear equations"));
        assert!(knowledge.contains("The variable is always x"));
    }

    #[test]
    fn test_overrides_leave_unset_fields_alone() {
        let cli = cli(&["--domain", "Chemistry"]);
        let patch = cli.overrides();
        assert_eq!(patch.name, None);

        let mut store = ProfileStore::with_profile(cli.base_profile().unwrap());
        store.apply(patch);
        assert_eq!(store.profile().knowledge_state.domain, "Chemistry");
        assert_eq!(store.profile().knowledge_state.topic, "");
        assert_eq!(store.profile().archetype_id, None);
    }

    #[test]
    fn test_unknown_archetype_fails() {
        let err = cli(&["--archetype", "nope"]).compile().unwrap_err();
        assert_eq!(err.to_string(), "Unknown archetype: nope");
    }

    #[test]
    fn test_render_modes() {
        let response = cli(&[]).compile().unwrap();

        let plain = cli(&[]).render(&response).unwrap();
        assert_eq!(plain, response.system_prompt);

        let section = cli(&["--section", "escapeValves"]).render(&response).unwrap();
        assert_eq!(section, response.prompt_sections.escape_valves);

        let json = cli(&["--json"]).render(&response).unwrap();
        let parsed: PersonaResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);

        let err = cli(&["--section", "nope"]).render(&response).unwrap_err();
        assert!(err.to_string().contains("knowledgeState"));
    }

    #[test]
    fn test_flag_conflicts() {
        assert!(Cli::try_parse_from(["compile", "--json", "--section", "escapeValves"]).is_err());
        assert!(Cli::try_parse_from(["compile", "--profile", "p.json", "--archetype", "esl-learner"]).is_err());
    }
}
