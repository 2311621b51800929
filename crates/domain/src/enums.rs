//! Integer-coded enumerations of the private API
//!
//! Every enumeration travels as a bare integer. Codes this crate does not
//! know about are kept as `Other(code)` so one new probe model or cook
//! state does not make a whole cook list unreadable.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        // Codes above 255 are a decode error, not `Other`
        #[serde(from = "u8", into = "u8")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Code not known to this crate
            Other(u8),
        }

        impl $name {
            /// Wire code
            pub fn code(self) -> u8 {
                u8::from(self)
            }

            /// Human-readable name
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                    $name::Other(_) => "Unknown",
                }
            }
        }

        impl From<u8> for $name {
            fn from(code: u8) -> Self {
                match code {
                    $( $code => $name::$variant, )+
                    other => $name::Other(other),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                match value {
                    $( $name::$variant => $code, )+
                    $name::Other(code) => code,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $name::Other(code) => write!(f, "Unknown ({})", code),
                    known => f.write_str(known.label()),
                }
            }
        }
    };
}

wire_enum! {
    /// Lifecycle state of a cook
    CookState {
        /// Probe inserted, nothing configured
        NotStarted = 0 => "Not started",
        /// Target and alarms configured
        Configured = 1 => "Configured",
        /// Cooking
        Started = 2 => "Started",
        /// Target reached, remove from heat
        ReadyForResting = 3 => "Ready for resting",
        /// Resting
        Resting = 4 => "Resting",
        /// Finished slightly below target
        SlightlyUnderdone = 5 => "Slightly underdone",
        /// Finished at target
        Finished = 6 => "Finished",
        /// Finished slightly above target
        SlightlyOverdone = 7 => "Slightly overdone",
        /// Finished well above target
        Overcook = 8 => "Overcooked",
    }
}

impl CookState {
    /// True once the cook reached one of its terminal states
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            CookState::SlightlyUnderdone
                | CookState::Finished
                | CookState::SlightlyOverdone
                | CookState::Overcook
        )
    }
}

wire_enum! {
    /// Device that relayed the probe to the cloud
    MasterType {
        /// MEATER Block
        Block = 0 => "Block",
        /// iOS app
        Ios = 1 => "iOS",
        /// Android app
        Android = 2 => "Android",
        /// Probe simulator
        ProbeSim = 3 => "Probe simulator",
        /// Second generation two-probe block
        BlockV2TwoProbe = 4 => "Block v2 (2 probes)",
        /// Second generation four-probe block
        BlockV2FourProbe = 5 => "Block v2 (4 probes)",
    }
}

wire_enum! {
    /// Probe model and slot
    ProbeType {
        /// Original MEATER probe
        Probe = 0 => "MEATER",
        /// Block slot 1
        BlockProbeOne = 1 => "Block probe 1",
        /// Block slot 2
        BlockProbeTwo = 2 => "Block probe 2",
        /// Block slot 3
        BlockProbeThree = 3 => "Block probe 3",
        /// Block slot 4
        BlockProbeFour = 4 => "Block probe 4",
        /// Thermomix edition
        ThermomixProbe = 5 => "Thermomix probe",
        /// Traeger edition
        TraegerProbe = 6 => "Traeger probe",
        /// MEATER Plus
        Plus = 128 => "MEATER Plus",
        /// MEATER Block
        Block = 8 => "Block",
        /// Second generation probe
        SecondGenerationProbe = 16 => "MEATER 2",
        /// Second generation block slot 1
        SecondGenerationBlockProbeOne = 17 => "Block 2 probe 1",
        /// Second generation block slot 2
        SecondGenerationBlockProbeTwo = 18 => "Block 2 probe 2",
        /// Second generation block slot 3
        SecondGenerationBlockProbeThree = 19 => "Block 2 probe 3",
        /// Second generation block slot 4
        SecondGenerationBlockProbeFour = 20 => "Block 2 probe 4",
        /// Second generation Thermomix edition
        SecondGenerationThermomixProbe = 21 => "Thermomix probe 2",
        /// Second generation Traeger edition
        SecondGenerationTraegerProbe = 22 => "Traeger probe 2",
        /// MEATER 2 Plus
        SecondGenerationPlus = 112 => "MEATER 2 Plus",
        /// Second generation Thermomix Plus
        SecondGenerationThermomixPlus = 80 => "Thermomix Plus 2",
        /// Second generation Traeger Plus
        SecondGenerationTraegerPlus = 144 => "Traeger Plus 2",
        /// Second generation two-probe block
        SecondGenerationTwoProbeBlock = 162 => "Block 2 (2 probes)",
        /// Second generation four-probe block
        SecondGenerationFourProbeBlock = 164 => "Block 2 (4 probes)",
        /// MEATER Pro (Amber)
        Amber = 64 => "MEATER Pro",
    }
}

wire_enum! {
    /// What an alarm watches
    AlarmType {
        /// Ambient below limit
        MinAmbient = 0 => "Min ambient",
        /// Ambient above limit
        MaxAmbient = 1 => "Max ambient",
        /// Internal below limit
        MinInternal = 2 => "Min internal",
        /// Internal above limit
        MaxInternal = 3 => "Max internal",
        /// Fixed delay from now
        TimeFromNow = 4 => "Time from now",
        /// Delay before the estimate says ready
        TimeBeforeReady = 5 => "Time before ready",
        /// Repeating reminder
        RepeatDuration = 6 => "Repeat duration",
        /// Estimator says ready
        EstimateReady = 7 => "Estimate ready",
    }
}

impl AlarmType {
    /// True when the alarm limit is an encoded temperature
    pub fn is_temperature(self) -> bool {
        matches!(
            self,
            AlarmType::MinAmbient
                | AlarmType::MaxAmbient
                | AlarmType::MinInternal
                | AlarmType::MaxInternal
        )
    }
}

wire_enum! {
    /// Alarm lifecycle
    AlarmState {
        /// Armed but condition not reachable yet
        NotReady = 0 => "Not ready",
        /// Armed
        Ready = 1 => "Ready",
        /// Triggered
        Fired = 2 => "Fired",
        /// Acknowledged by the user
        Dismissed = 3 => "Dismissed",
    }
}
