//! SchemaEngine: validate, repair locally, re-validate, and hand anything
//! still unresolved to an optional external repairer.

use nexus_core::config::PipelineConfig;
use nexus_core::draft::GraphDraft;
use nexus_core::traits::IDraftRepairer;
use tracing::{info, warn};

use crate::checks::validate;
use crate::repair::{repair, RepairDefaults};
use crate::report::{RepairOutcome, SchemaOutcome};

/// Runs the schema stage of the pipeline.
#[derive(Debug, Clone, Default)]
pub struct SchemaEngine {
    defaults: RepairDefaults,
    external_repair: bool,
}

impl SchemaEngine {
    pub fn new(defaults: RepairDefaults, external_repair: bool) -> Self {
        Self {
            defaults,
            external_repair,
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(
            RepairDefaults {
                version: config.default_version.clone(),
                ..RepairDefaults::default()
            },
            config.external_repair,
        )
    }

    /// Validate a draft and repair it as far as possible.
    ///
    /// Local repair runs at most once per draft. When errors remain and an
    /// external repairer is supplied and enabled, its output is repaired
    /// locally again and re-validated. A failing external repairer leaves the
    /// locally repaired draft in place.
    pub fn check_and_repair(
        &self,
        draft: GraphDraft,
        external: Option<&dyn IDraftRepairer>,
    ) -> SchemaOutcome {
        let initial = validate(&draft);
        if initial.is_ok() {
            return SchemaOutcome {
                draft,
                initial_errors: Vec::new(),
                remaining_errors: Vec::new(),
                fixed: 0,
                external_repairer: None,
            };
        }

        info!(errors = initial.len(), "draft invalid, applying local repair");
        let RepairOutcome { draft, mut fixed } = repair(draft, &initial.errors, &self.defaults);
        let after_local = validate(&draft);

        let mut outcome = SchemaOutcome {
            draft,
            initial_errors: initial.errors,
            remaining_errors: after_local.errors,
            fixed,
            external_repairer: None,
        };
        if outcome.is_clean() || !self.external_repair {
            return outcome;
        }
        let Some(repairer) = external else {
            return outcome;
        };

        info!(
            repairer = repairer.name(),
            errors = outcome.remaining_errors.len(),
            "draft still invalid, invoking external repair"
        );
        outcome.external_repairer = Some(repairer.name().to_string());
        match repairer.repair(outcome.draft.clone(), &outcome.remaining_errors) {
            Ok(candidate) => {
                let report = validate(&candidate);
                let RepairOutcome { draft, fixed: extra } =
                    repair(candidate, &report.errors, &self.defaults);
                fixed += extra;
                outcome.remaining_errors = validate(&draft).errors;
                outcome.draft = draft;
                outcome.fixed = fixed;
            }
            Err(e) => {
                warn!(repairer = repairer.name(), error = %e, "external repair failed, keeping local repair");
            }
        }
        outcome
    }
}
