//! Orchestration for `stubgen generate`, `stubgen pairs` and `stubgen check`.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::core::invariants::{is_degenerate, validate_entities};
use crate::core::pairs::{CollisionPair, plan_collisions};
use crate::entities::EntityNameList;
use crate::io::config::{GeneratorConfig, load_config};
use crate::io::render::{StubRenderer, StubStyle};

/// Render the collision stubs for `entities`.
///
/// Total over any list: fewer than two names yields an empty string.
pub fn generate_stubs(entities: &EntityNameList, style: &StubStyle) -> Result<String> {
    let plan = plan_collisions(entities);
    debug!(
        entities = entities.len(),
        groups = plan.groups.len(),
        "planned collision loops"
    );
    StubRenderer::new().render(&plan, style)
}

/// Like [`generate_stubs`], but rejects lists that fail entity validation.
pub fn generate_stubs_strict(entities: &EntityNameList, style: &StubStyle) -> Result<String> {
    let errors = validate_entities(entities);
    if !errors.is_empty() {
        bail!("entity violations:\n- {}", errors.join("\n- "));
    }
    generate_stubs(entities, style)
}

/// Pairs in emission order, for machine-readable output.
pub fn collision_pairs(entities: &EntityNameList) -> Vec<CollisionPair> {
    plan_collisions(entities).pairs()
}

/// Outcome of `stubgen check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// List is valid and yields at least one pair.
    Ok,
    /// List is otherwise fine but has fewer than two names.
    Degenerate(Vec<String>),
    /// List has identifier or duplicate violations.
    Invalid(Vec<String>),
}

pub fn check_entities(entities: &EntityNameList) -> CheckOutcome {
    let errors = validate_entities(entities);
    if errors.is_empty() {
        return CheckOutcome::Ok;
    }
    // A short list reports exactly one violation unless its names are also bad.
    if is_degenerate(entities) && errors.len() == 1 {
        return CheckOutcome::Degenerate(errors);
    }
    CheckOutcome::Invalid(errors)
}

/// Resolve config and the effective entity list.
///
/// Names given on the command line replace the configured list.
pub fn resolve_inputs(
    config_path: &Path,
    cli_names: &[String],
) -> Result<(GeneratorConfig, EntityNameList)> {
    let cfg = load_config(config_path)
        .with_context(|| format!("load config {}", config_path.display()))?;
    let entities = if cli_names.is_empty() {
        cfg.entities.clone()
    } else {
        EntityNameList::new(cli_names.iter().cloned())
    };
    info!(
        config = %config_path.display(),
        entities = entities.len(),
        from_cli = !cli_names.is_empty(),
        "resolved entity list"
    );
    Ok((cfg, entities))
}
