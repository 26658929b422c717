// demos/minimal/src/main.rs
// ============================================================================
// Module: Geobridge Minimal Demo
// Description: Minimal end-to-end invocation using an in-memory dispatcher.
// Purpose: Demonstrate catalog loading, binding, building, and dispatch.
// Dependencies: geobridge-catalog, geobridge-core
// ============================================================================

//! ## Overview
//! Loads a one-tool catalog, binds parameters, builds a validated request,
//! and hands it to an in-memory dispatcher stub. The stub stands in for the
//! out-of-scope engine transport and simply acknowledges with a job id.

use std::io::Write;

use geobridge_catalog::ToolCatalog;
use geobridge_core::DatasetRef;
use geobridge_core::DispatchError;
use geobridge_core::DispatchTicket;
use geobridge_core::EngineDispatcher;
use geobridge_core::EnvironmentOverlay;
use geobridge_core::ExecuteQualifier;
use geobridge_core::InvocationBuilder;
use geobridge_core::InvocationRequest;
use geobridge_core::ParamValue;
use geobridge_core::ParameterBindings;

/// One-tool manifest for the demo.
const MANIFEST: &str = r#"
[[tool]]
display_name = "Copy TIN"
execute_qualifier = "3d.CopyTin"
toolbox_id = "3d-analyst"
environment = ["extent", "workspace"]

[[tool.parameter]]
name = "InTin"
requirement = "required"
value_type = "dataset"

[[tool.parameter]]
name = "OutTin"
requirement = "required"
value_type = "dataset"

[[tool.parameter]]
name = "Version"
requirement = "optional"
value_type = "code"
default = { kind = "code", value = "CURRENT" }

[tool.parameter.domain]
kind = "coded_value_set"

[[tool.parameter.domain.entries]]
code = "PRE_10.0"
labels = { en = "Pre 10.0 TIN" }

[[tool.parameter.domain.entries]]
code = "CURRENT"
labels = { en = "Current TIN" }
"#;

/// Dispatcher stub that acknowledges every request.
struct EchoDispatcher;

impl EngineDispatcher for EchoDispatcher {
    fn dispatch(&self, request: &InvocationRequest) -> Result<DispatchTicket, DispatchError> {
        let request_hash =
            request.canonical_hash().map_err(|err| DispatchError::Failed(err.to_string()))?;
        Ok(DispatchTicket {
            job_id: "job-0001".to_string(),
            request_hash: Some(request_hash),
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = ToolCatalog::load_toml_str(MANIFEST)?;
    let qualifier = ExecuteQualifier::new("3d.CopyTin");
    let tool = catalog.require(&qualifier)?;

    let mut bindings = ParameterBindings::new();
    bindings.set("InTin", ParamValue::Dataset(DatasetRef::new("C:/data/site.tin")));
    bindings.set("OutTin", ParamValue::Dataset(DatasetRef::new("C:/data/site_copy.tin")));

    let mut overlay = EnvironmentOverlay::new();
    overlay.set("extent", ParamValue::Text("0 0 100 100".to_string()));
    overlay.set("cellSize", ParamValue::Float(30.0));

    let built = InvocationBuilder::new(tool).build(&bindings, &overlay)?;
    let ticket = EchoDispatcher.dispatch(&built.request)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "qualifier: {}", built.request.execute_qualifier)?;
    writeln!(out, "arguments: {}", built.request.ordered_arguments.len())?;
    writeln!(out, "environment entries: {}", built.request.environment.len())?;
    writeln!(out, "job: {}", ticket.job_id)?;
    Ok(())
}
