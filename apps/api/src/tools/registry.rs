//! Tool registry — the core functions exposed as named, typed tools in a
//! lookup table, invoked by name with validated arguments.
//!
//! Each tool deserializes its own argument struct from JSON (bad arguments
//! are `InvalidInput`, not a panic) and returns a JSON result. This is the
//! surface an orchestrating agent calls; it carries no framework
//! assumptions beyond JSON in/out.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::catalog::SkillCatalog;
use crate::errors::AppError;
use crate::gap::analyzer::{analyze_skill_gap, ReadinessThresholds};
use crate::learning::planner::generate_learning_path;
use crate::matching::insights::summarize_market;
use crate::matching::scorer::{rank_postings, MatchWeights};
use crate::models::job::JobPosting;
use crate::models::profile::ResumeProfile;
use crate::parser::ResumeParser;

/// Shared dependencies handed to every tool invocation.
pub struct ToolContext {
    pub parser: Arc<ResumeParser>,
    pub catalog: Arc<SkillCatalog>,
    pub weights: MatchWeights,
    pub thresholds: ReadinessThresholds,
}

type ToolFn = fn(&ToolContext, Value) -> Result<Value, AppError>;

pub struct Tool {
    pub name: &'static str,
    pub description: &'static str,
    run: ToolFn,
}

pub struct ToolRegistry {
    tools: HashMap<&'static str, Tool>,
}

impl ToolRegistry {
    /// Builds the registry with the full default tool set.
    pub fn with_default_tools() -> Self {
        let mut tools = HashMap::new();
        for tool in default_tools() {
            tools.insert(tool.name, tool);
        }
        Self { tools }
    }

    /// Invokes a tool by name. Unknown names are `NotFound`; argument
    /// mismatches are `InvalidInput`.
    pub fn invoke(&self, ctx: &ToolContext, name: &str, args: Value) -> Result<Value, AppError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| AppError::NotFound(format!("Unknown tool '{name}'")))?;
        (tool.run)(ctx, args)
    }

    /// Registered (name, description) pairs, sorted by name.
    pub fn list(&self) -> Vec<(&'static str, &'static str)> {
        let mut entries: Vec<_> = self
            .tools
            .values()
            .map(|t| (t.name, t.description))
            .collect();
        entries.sort();
        entries
    }
}

fn parse_args<T: for<'de> Deserialize<'de>>(tool: &str, args: Value) -> Result<T, AppError> {
    serde_json::from_value(args)
        .map_err(|e| AppError::InvalidInput(format!("Invalid arguments for '{tool}': {e}")))
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value).map_err(|e| AppError::Internal(anyhow::Error::new(e)))
}

fn default_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "parse_resume",
            description: "Parse raw resume text into a structured profile",
            run: |ctx, args| {
                #[derive(Deserialize)]
                struct Args {
                    resume_text: String,
                }
                let args: Args = parse_args("parse_resume", args)?;
                let profile = ctx.parser.parse(&args.resume_text)?;
                to_value(&profile)
            },
        },
        Tool {
            name: "analyze_skill_gap",
            description: "Compare candidate skills against a target role's requirements",
            run: |ctx, args| {
                #[derive(Deserialize)]
                struct Args {
                    skills: Vec<String>,
                    target_role: String,
                }
                let args: Args = parse_args("analyze_skill_gap", args)?;
                let result =
                    analyze_skill_gap(&ctx.catalog, &args.skills, &args.target_role, &ctx.thresholds);
                to_value(&result)
            },
        },
        Tool {
            name: "match_jobs",
            description: "Rank job postings against a candidate profile",
            run: |ctx, args| {
                #[derive(Deserialize)]
                struct Args {
                    profile: ResumeProfile,
                    postings: Vec<JobPosting>,
                    #[serde(default)]
                    min_score: f64,
                }
                let args: Args = parse_args("match_jobs", args)?;
                let ranked = rank_postings(
                    &ctx.catalog,
                    &ctx.weights,
                    &args.profile,
                    &args.postings,
                    args.min_score,
                )?;
                to_value(&ranked)
            },
        },
        Tool {
            name: "generate_learning_path",
            description: "Build a staged curriculum closing a skill gap within a time horizon",
            run: |_ctx, args| {
                #[derive(Deserialize)]
                struct Args {
                    missing_skills: Vec<String>,
                    horizon_months: u32,
                }
                let args: Args = parse_args("generate_learning_path", args)?;
                let stages = generate_learning_path(&args.missing_skills, args.horizon_months)?;
                to_value(&stages)
            },
        },
        Tool {
            name: "market_insights",
            description: "Summarize demand signals over a batch of postings",
            run: |ctx, args| {
                #[derive(Deserialize)]
                struct Args {
                    role: String,
                    postings: Vec<JobPosting>,
                }
                let args: Args = parse_args("market_insights", args)?;
                let insights = summarize_market(&ctx.catalog, &args.role, &args.postings);
                to_value(&insights)
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context() -> ToolContext {
        let catalog = Arc::new(SkillCatalog::builtin().unwrap());
        ToolContext {
            parser: Arc::new(ResumeParser::new(catalog.clone())),
            catalog,
            weights: MatchWeights::default(),
            thresholds: ReadinessThresholds::default(),
        }
    }

    #[test]
    fn test_all_default_tools_registered() {
        let registry = ToolRegistry::with_default_tools();
        let names: Vec<&str> = registry.list().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec![
                "analyze_skill_gap",
                "generate_learning_path",
                "market_insights",
                "match_jobs",
                "parse_resume",
            ]
        );
    }

    #[test]
    fn test_unknown_tool_is_not_found() {
        let registry = ToolRegistry::with_default_tools();
        let err = registry
            .invoke(&context(), "does_not_exist", json!({}))
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_invalid_arguments_are_invalid_input() {
        let registry = ToolRegistry::with_default_tools();
        let err = registry
            .invoke(&context(), "analyze_skill_gap", json!({"skills": "not-a-list"}))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_analyze_skill_gap_tool_round_trip() {
        let registry = ToolRegistry::with_default_tools();
        let result = registry
            .invoke(
                &context(),
                "analyze_skill_gap",
                json!({"skills": ["Python", "SQL"], "target_role": "Data Scientist"}),
            )
            .unwrap();
        assert_eq!(result["target_role"], "Data Scientist");
        assert_eq!(result["role_resolved"], true);
        assert!(result["match_percentage"].is_number());
    }

    #[test]
    fn test_generate_learning_path_tool_propagates_typed_errors() {
        let registry = ToolRegistry::with_default_tools();
        let err = registry
            .invoke(
                &context(),
                "generate_learning_path",
                json!({"missing_skills": ["Rust"], "horizon_months": 0}),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_match_jobs_tool_with_empty_postings() {
        let registry = ToolRegistry::with_default_tools();
        let profile = json!({
            "full_name": "Test",
            "email": null,
            "phone": null,
            "location": null,
            "links": [],
            "skills": ["Python"],
            "education": [],
            "experience": [],
            "summary": null,
            "confidence_score": 0.5
        });
        let result = registry
            .invoke(
                &context(),
                "match_jobs",
                json!({"profile": profile, "postings": []}),
            )
            .unwrap();
        assert_eq!(result, json!([]));
    }
}
