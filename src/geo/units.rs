use std::fmt;
use std::str::FromStr;

use uom::si::f64::Length;
use uom::si::length::{foot, kilometer, meter, mile, nautical_mile, yard};

use crate::utils::error::ToolError;

/// Distance unit tokens accepted for buffer distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUnit {
    Meters,
    Kilometers,
    Feet,
    Yards,
    Miles,
    NauticalMiles,
}

impl BufferUnit {
    /// A distance in this unit, expressed in meters.
    pub fn to_meters(self, distance: f64) -> f64 {
        let length = match self {
            BufferUnit::Meters => Length::new::<meter>(distance),
            BufferUnit::Kilometers => Length::new::<kilometer>(distance),
            BufferUnit::Feet => Length::new::<foot>(distance),
            BufferUnit::Yards => Length::new::<yard>(distance),
            BufferUnit::Miles => Length::new::<mile>(distance),
            BufferUnit::NauticalMiles => Length::new::<nautical_mile>(distance),
        };
        length.get::<meter>()
    }
}

impl FromStr for BufferUnit {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(BufferUnit::Meters),
            "km" | "kilometer" | "kilometers" => Ok(BufferUnit::Kilometers),
            "ft" | "foot" | "feet" => Ok(BufferUnit::Feet),
            "yd" | "yard" | "yards" => Ok(BufferUnit::Yards),
            "mi" | "mile" | "miles" => Ok(BufferUnit::Miles),
            "nm" | "nmi" | "nauticalmile" | "nauticalmiles" | "nautical miles" => {
                Ok(BufferUnit::NauticalMiles)
            }
            other => Err(ToolError::InvalidConfigValueError {
                field: "units".to_string(),
                value: other.to_string(),
                reason: "Unknown distance unit".to_string(),
            }),
        }
    }
}

impl fmt::Display for BufferUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BufferUnit::Meters => "Meters",
            BufferUnit::Kilometers => "Kilometers",
            BufferUnit::Feet => "Feet",
            BufferUnit::Yards => "Yards",
            BufferUnit::Miles => "Miles",
            BufferUnit::NauticalMiles => "NauticalMiles",
        };
        f.write_str(name)
    }
}
