use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of in-app UI element a style string is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurfaceType {
    Tooltip,
    Modal,
    Checklist,
    LauncherIcon,
    LauncherBeacon,
    ChecklistLauncher,
    Survey,
    Nps,
}

impl SurfaceType {
    pub const ALL: [SurfaceType; 8] = [
        SurfaceType::Tooltip,
        SurfaceType::Modal,
        SurfaceType::Checklist,
        SurfaceType::LauncherIcon,
        SurfaceType::LauncherBeacon,
        SurfaceType::ChecklistLauncher,
        SurfaceType::Survey,
        SurfaceType::Nps,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceType::Tooltip => "tooltip",
            SurfaceType::Modal => "modal",
            SurfaceType::Checklist => "checklist",
            SurfaceType::LauncherIcon => "launcher-icon",
            SurfaceType::LauncherBeacon => "launcher-beacon",
            SurfaceType::ChecklistLauncher => "checklist-launcher",
            SurfaceType::Survey => "survey",
            SurfaceType::Nps => "nps",
        }
    }
}

impl fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SurfaceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SurfaceType::ALL
            .into_iter()
            .find(|surface| surface.as_str() == s)
            .ok_or_else(|| format!("unknown surface type: {s}"))
    }
}
