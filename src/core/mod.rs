pub mod caps;
pub mod division293;
pub mod input;
pub mod optimise;
pub mod params;
pub mod projection;
pub mod scenario;
pub mod schedule;
pub mod surcharge;

// Flat public surface for domain types and functions.
pub use caps::{cap_summary, CapSummary};
pub use division293::{division293_tax, DIVISION_293_RATE};
pub use input::{read_scenario_json, ScenarioFile, ScheduleInput};
pub use optimise::{optimise_salary_sacrifice, SacrificeComparison};
pub use params::{SuperParams, CONTRIBUTIONS_TAX_RATE};
pub use projection::{final_balance, project, YearRecord};
pub use scenario::{evaluate, ScenarioInput, ScenarioSnapshot};
pub use schedule::{BracketThreshold, ScheduleError, TaxBracket, TaxSchedule};
pub use surcharge::{surcharge, SurchargeParams};
