//! Temporary per-workspace gap adjustment.
//!
//! Changes are applied with a `workspace` keyword, so they last until the
//! next config reload.  Two couplings keep the layout sensible:
//!
//! * outer gaps at 0 force inner gaps to 0,
//! * growing outer gaps while inner gaps are 0 restores the default inner
//!   gaps.
//!
//! Rounded corners follow the inner gaps.

use super::{take, ActionError};
use crate::command::{GapLocation, GapsRequest};
use crate::hyprland::{OptionValue, WorkspaceRef, WorkspaceRule};
use crate::ipc::client::decode;
use crate::ipc::{HyprClient, IpcError, Transport};
use log::{debug, info};

/// Inner and outer gap sizes of one workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gaps {
    pub inner: i64,
    pub outer: i64,
}

/// Apply `request` to the active workspace.
pub fn adjust_gaps<T: Transport>(
    client: &HyprClient<T>,
    request: &GapsRequest,
) -> Result<(), ActionError> {
    let [workspace, rules, gaps_in, gaps_out, border] = take::<5>(client.batch_query(&[
        "activeworkspace",
        "workspacerules",
        "getoption general:gaps_in",
        "getoption general:gaps_out",
        "getoption general:border_size",
    ])?)?;
    let workspace: WorkspaceRef = decode(workspace)?;
    let rules: Vec<WorkspaceRule> = decode(rules)?;
    let default_inner: OptionValue = decode(gaps_in)?;
    let default_outer: OptionValue = decode(gaps_out)?;
    let border: OptionValue = decode(border)?;
    debug!(
        "workspace {}: default gaps {:?}/{:?}, border {:?}",
        workspace.id, default_inner.custom, default_outer.custom, border.int
    );

    let rule = rules
        .iter()
        .find(|r| r.workspace_string == workspace.id.to_string());
    let current = Gaps {
        inner: match rule.and_then(WorkspaceRule::inner) {
            Some(v) => v,
            None => option_int(&default_inner)?,
        },
        outer: match rule.and_then(WorkspaceRule::outer) {
            Some(v) => v,
            None => option_int(&default_outer)?,
        },
    };

    let mut gaps = current;
    match request.location {
        GapLocation::Inner => gaps.inner = request.change.apply(current.inner),
        GapLocation::Outer => gaps.outer = request.change.apply(current.outer),
    }

    if request.exclude.contains(&workspace.id) {
        info!("workspace {} is excluded, leaving gaps alone", workspace.id);
        return Ok(());
    }

    let gaps = couple(gaps, request.location, || option_int(&default_inner))?;
    let rounding = gaps.inner > 0;
    client.set_keyword(&format!(
        "workspace {}, gapsin:{}, gapsout:{}, rounding:{}",
        workspace.id, gaps.inner, gaps.outer, rounding
    ))?;
    Ok(())
}

/// Enforce the inner/outer couplings on freshly adjusted gaps.
fn couple(
    mut gaps: Gaps,
    location: GapLocation,
    default_inner: impl FnOnce() -> Result<i64, IpcError>,
) -> Result<Gaps, IpcError> {
    if gaps.outer == 0 {
        gaps.inner = 0;
    } else if gaps.inner == 0 && location == GapLocation::Outer {
        gaps.inner = default_inner()?;
    }
    Ok(gaps)
}

fn option_int(option: &OptionValue) -> Result<i64, IpcError> {
    option.leading_int().ok_or_else(|| {
        IpcError::Protocol(format!("option {} has no integer value", option.option))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::GapChange;
    use crate::testing::ScriptedTransport;
    use std::collections::BTreeSet;

    const RULES: &str = r#"[
        {"workspaceString":"2","gapsIn":["3","3","3","3"],"gapsOut":["12","12","12","12"]},
        {"workspaceString":"9","monitor":"DP-1"}
    ]"#;

    fn snapshot(workspace: i64) -> String {
        format!(
            "{{\"id\":{id},\"name\":\"{id}\"}}\n\n{rules}\n\n\
             {{\"option\":\"general:gaps_in\",\"custom\":\"5 5 5 5\",\"set\":true}}\n\n\
             {{\"option\":\"general:gaps_out\",\"custom\":\"20 20 20 20\",\"set\":true}}\n\n\
             {{\"option\":\"general:border_size\",\"int\":2,\"set\":true}}",
            id = workspace,
            rules = RULES
        )
    }

    fn request(location: GapLocation, change: GapChange) -> GapsRequest {
        GapsRequest {
            location,
            change,
            exclude: BTreeSet::new(),
        }
    }

    fn keyword_for(workspace: i64, req: &GapsRequest) -> Vec<String> {
        let snap = snapshot(workspace);
        let client = HyprClient::new(ScriptedTransport::new(&[snap.as_str(), "ok"]));
        adjust_gaps(&client, req).unwrap();
        client.transport().requests()
    }

    #[test]
    fn queries_one_snapshot() {
        let requests = keyword_for(1, &request(GapLocation::Inner, GapChange::Increase(1)));
        assert_eq!(
            requests[0],
            "[[BATCH]]j/activeworkspace;j/workspacerules;j/getoption general:gaps_in;\
             j/getoption general:gaps_out;j/getoption general:border_size"
        );
    }

    #[test]
    fn increases_inner_from_defaults() {
        let requests = keyword_for(1, &request(GapLocation::Inner, GapChange::Increase(2)));
        assert_eq!(
            requests[1],
            "keyword workspace 1, gapsin:7, gapsout:20, rounding:true"
        );
    }

    #[test]
    fn uses_rule_overrides() {
        let requests = keyword_for(2, &request(GapLocation::Outer, GapChange::Decrease(4)));
        assert_eq!(
            requests[1],
            "keyword workspace 2, gapsin:3, gapsout:8, rounding:true"
        );
    }

    #[test]
    fn rule_without_overrides_falls_back_to_defaults() {
        let requests = keyword_for(9, &request(GapLocation::Outer, GapChange::Increase(5)));
        assert_eq!(
            requests[1],
            "keyword workspace 9, gapsin:5, gapsout:25, rounding:true"
        );
    }

    #[test]
    fn inner_decrease_clamps_and_disables_rounding() {
        let requests = keyword_for(1, &request(GapLocation::Inner, GapChange::Decrease(50)));
        assert_eq!(
            requests[1],
            "keyword workspace 1, gapsin:0, gapsout:20, rounding:false"
        );
    }

    #[test]
    fn outer_to_zero_forces_inner_to_zero() {
        let requests = keyword_for(1, &request(GapLocation::Outer, GapChange::Decrease(20)));
        assert_eq!(
            requests[1],
            "keyword workspace 1, gapsin:0, gapsout:0, rounding:false"
        );
    }

    #[test]
    fn growing_outer_restores_default_inner() {
        let gaps = couple(
            Gaps { inner: 0, outer: 4 },
            GapLocation::Outer,
            || Ok(5),
        )
        .unwrap();
        assert_eq!(gaps, Gaps { inner: 5, outer: 4 });
    }

    #[test]
    fn inner_zero_with_outer_gaps_stays_when_adjusting_inner() {
        let gaps = couple(Gaps { inner: 0, outer: 4 }, GapLocation::Inner, || Ok(5)).unwrap();
        assert_eq!(gaps, Gaps { inner: 0, outer: 4 });
    }

    #[test]
    fn flat_workspace_recovers_through_outer_increase() {
        let rules = r#"[{"workspaceString":"4","gapsIn":["0"],"gapsOut":["0"]}]"#;
        let snap = snapshot(4).replacen(RULES, rules, 1);
        let client = HyprClient::new(ScriptedTransport::new(&[snap.as_str(), "ok"]));
        adjust_gaps(&client, &request(GapLocation::Outer, GapChange::Increase(10))).unwrap();
        assert_eq!(
            client.transport().requests()[1],
            "keyword workspace 4, gapsin:5, gapsout:10, rounding:true"
        );
    }

    #[test]
    fn excluded_workspace_is_left_alone() {
        let snap = snapshot(2);
        let client = HyprClient::new(ScriptedTransport::new(&[snap.as_str()]));
        let req = GapsRequest {
            exclude: [2, 3].into_iter().collect(),
            ..request(GapLocation::Outer, GapChange::Decrease(20))
        };
        adjust_gaps(&client, &req).unwrap();
        assert_eq!(client.transport().requests().len(), 1);
    }

    #[test]
    fn unparsable_default_is_protocol_error() {
        let snap = snapshot(1).replacen("5 5 5 5", "auto", 1);
        let client = HyprClient::new(ScriptedTransport::new(&[snap.as_str()]));
        let err = adjust_gaps(&client, &request(GapLocation::Inner, GapChange::Increase(1)))
            .unwrap_err();
        assert!(matches!(err, ActionError::Ipc(IpcError::Protocol(_))));
    }
}
