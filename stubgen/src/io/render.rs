//! Template rendering for collision loop stubs.
//!
//! The plan decides which pairs exist; this module only decides how they
//! look. All identifier construction goes through [`crate::core::naming`].

use anyhow::Result;
use minijinja::{Environment, context};
use serde::Serialize;
use tracing::debug;

use crate::core::naming::{check_function_name, collection_name};
use crate::core::pairs::CollisionPlan;
use crate::io::config::GeneratorConfig;

const COLLISION_LOOPS_TEMPLATE: &str = include_str!("templates/collision_loops.cpp.j2");

/// Text policy applied when rendering a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubStyle {
    pub indent: String,
    pub collection_suffix: String,
    pub function_suffix: String,
}

impl Default for StubStyle {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

impl StubStyle {
    pub fn from_config(cfg: &GeneratorConfig) -> Self {
        Self {
            indent: cfg.indent.clone(),
            collection_suffix: cfg.collection_suffix.clone(),
            function_suffix: cfg.function_suffix.clone(),
        }
    }
}

/// Outer loop block as seen by the template.
#[derive(Debug, Serialize)]
struct GroupView {
    outer: String,
    collection: String,
    checks: Vec<CheckView>,
}

/// Inner loop plus its collision check.
#[derive(Debug, Serialize)]
struct CheckView {
    inner: String,
    collection: String,
    function: String,
}

fn group_views(plan: &CollisionPlan, style: &StubStyle) -> Vec<GroupView> {
    plan.groups
        .iter()
        .map(|group| GroupView {
            outer: group.outer.clone(),
            collection: collection_name(&group.outer, &style.collection_suffix),
            checks: group
                .inners
                .iter()
                .map(|inner| CheckView {
                    inner: inner.clone(),
                    collection: collection_name(inner, &style.collection_suffix),
                    function: check_function_name(&group.outer, inner, &style.function_suffix),
                })
                .collect(),
        })
        .collect()
}

/// Template engine wrapper around minijinja.
pub struct StubRenderer {
    env: Environment<'static>,
}

impl Default for StubRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StubRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Block tags sit on their own lines; drop those lines from the output.
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template("collision_loops", COLLISION_LOOPS_TEMPLATE)
            .expect("collision loop template should be valid");
        Self { env }
    }

    /// Render every group of `plan`. An empty plan renders as `""`.
    pub fn render(&self, plan: &CollisionPlan, style: &StubStyle) -> Result<String> {
        let groups = group_views(plan, style);
        let template = self.env.get_template("collision_loops")?;
        let rendered = template.render(context! {
            indent => &style.indent,
            groups => groups,
        })?;
        debug!(
            groups = plan.groups.len(),
            bytes = rendered.len(),
            "rendered collision loops"
        );
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pairs::plan_collisions;
    use crate::test_support::entities;

    #[test]
    fn renders_single_pair_exactly() {
        let plan = plan_collisions(&entities(&["mirror", "portal"]));
        let out = StubRenderer::new()
            .render(&plan, &StubStyle::default())
            .expect("render");
        assert_eq!(
            out,
            "for (const auto& mirror : mirrors) {\n\
             \tfor (const auto& portal : portals) {\n\
             \t\tif (mirrorVsPortal(mirror, portal)) {  }\n\
             \t}\n\
             }\n"
        );
    }

    #[test]
    fn empty_plan_renders_nothing() {
        let out = StubRenderer::new()
            .render(&CollisionPlan::default(), &StubStyle::default())
            .expect("render");
        assert_eq!(out, "");
    }

    #[test]
    fn style_controls_indent_and_suffixes() {
        let plan = plan_collisions(&entities(&["ship", "rock"]));
        let style = StubStyle {
            indent: "  ".to_string(),
            collection_suffix: "List".to_string(),
            function_suffix: "Collision".to_string(),
        };
        let out = StubRenderer::new().render(&plan, &style).expect("render");
        assert_eq!(
            out,
            "for (const auto& ship : shipList) {\n  for (const auto& rock : rockList) {\n    if (shipVsRockCollision(ship, rock)) {  }\n  }\n}\n"
        );
    }

    #[test]
    fn names_are_not_html_escaped() {
        let plan = plan_collisions(&entities(&["a", "b"]));
        let out = StubRenderer::new()
            .render(&plan, &StubStyle::default())
            .expect("render");
        assert!(out.contains("const auto& a : as"));
    }
}
