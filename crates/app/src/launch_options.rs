//! Launch-time settings: `--grid WxD` and `--tool ID` on the command line,
//! or `?grid=WxD&tool=ID` in the page URL when running in a browser.

use bevy::prelude::*;

use simulation::buildings::BuildingType;
use simulation::grid::{parse_dimension, GridAxis, GridConfig, GridSizeError};
use simulation::placement::PlacementController;

/// Launch settings as given, unparsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchRequest {
    pub grid: Option<String>,
    pub tool: Option<String>,
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "toytown", about = "Place and remove buildings on a 3D grid")]
struct Cli {
    /// Initial grid size as WIDTHxDEPTH, e.g. 30x30
    #[arg(long, value_name = "WxD")]
    grid: Option<String>,
    /// Initially selected tool: residential, commercial, industrial, road or park
    #[arg(long, value_name = "ID")]
    tool: Option<String>,
}

#[cfg(not(target_arch = "wasm32"))]
pub fn launch_request() -> LaunchRequest {
    use clap::Parser;
    let cli = Cli::parse();
    LaunchRequest {
        grid: cli.grid,
        tool: cli.tool,
    }
}

#[cfg(target_arch = "wasm32")]
pub fn launch_request() -> LaunchRequest {
    let Some(params) = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
    else {
        return LaunchRequest::default();
    };
    let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
    LaunchRequest {
        grid: non_empty(params.get("grid")),
        tool: non_empty(params.get("tool")),
    }
}

/// Controller for startup. Invalid values fall back to the defaults.
pub fn launch_controller(request: &LaunchRequest) -> PlacementController {
    let mut controller = PlacementController::new(launch_grid(request.grid.as_deref()));
    if let Some(id) = request.tool.as_deref() {
        let tool = BuildingType::from_tool_id(id);
        if !tool.tool_id().eq_ignore_ascii_case(id.trim()) {
            warn!("Unknown launch tool '{id}', using {}", tool.label());
        }
        controller.select_tool(tool);
    }
    controller
}

/// Parse `WxD` (either case of `x`) into a validated grid config.
pub fn parse_grid_spec(spec: &str) -> Result<GridConfig, GridSizeError> {
    let spec = spec.trim();
    let Some((width, depth)) = spec.split_once(['x', 'X']) else {
        return Err(GridSizeError::NotANumber {
            axis: GridAxis::Width,
            input: spec.to_string(),
        });
    };
    let width = parse_dimension(GridAxis::Width, width)?;
    let depth = parse_dimension(GridAxis::Depth, depth)?;
    GridConfig::with_size(i64::from(width), i64::from(depth))
}

/// Grid config for startup. An invalid request falls back to the default.
pub fn launch_grid(requested: Option<&str>) -> GridConfig {
    let Some(spec) = requested else {
        return GridConfig::default();
    };
    match parse_grid_spec(spec) {
        Ok(config) => {
            info!("Starting with a {}x{} grid", config.width, config.depth);
            config
        }
        Err(err) => {
            warn!("Ignoring launch grid '{spec}': {err}");
            GridConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grid_spec() {
        let config = parse_grid_spec("30x12").unwrap();
        assert_eq!((config.width, config.depth), (30, 12));
        let config = parse_grid_spec(" 8X8 ").unwrap();
        assert_eq!((config.width, config.depth), (8, 8));
    }

    #[test]
    fn test_parse_grid_spec_rejects_bad_input() {
        assert!(matches!(
            parse_grid_spec("30"),
            Err(GridSizeError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_grid_spec("0x5"),
            Err(GridSizeError::NotPositive { value: 0, .. })
        ));
        assert!(matches!(
            parse_grid_spec("5xdeep"),
            Err(GridSizeError::NotANumber {
                axis: GridAxis::Depth,
                ..
            })
        ));
    }

    #[test]
    fn test_launch_controller_selects_tool_by_id() {
        let request = LaunchRequest {
            grid: Some("12x9".to_string()),
            tool: Some("Road".to_string()),
        };
        let controller = launch_controller(&request);
        assert_eq!(controller.selected_tool(), BuildingType::Road);
        assert_eq!((controller.grid().width, controller.grid().depth), (12, 9));
    }

    #[test]
    fn test_launch_controller_unknown_tool_falls_back_to_residential() {
        let request = LaunchRequest {
            grid: None,
            tool: Some("skyscraper".to_string()),
        };
        let controller = launch_controller(&request);
        assert_eq!(controller.selected_tool(), BuildingType::Residential);
        assert_eq!(*controller.grid(), GridConfig::default());
    }

    #[test]
    fn test_launch_grid_falls_back_to_default() {
        assert_eq!(launch_grid(None), GridConfig::default());
        assert_eq!(launch_grid(Some("-3x4")), GridConfig::default());
        assert_eq!(launch_grid(Some("40x25")).width, 40);
    }
}
