pub mod batch;
pub mod partition;
pub mod settings;
pub mod split;

pub use batch::{split_batch, BatchOptions, BatchProgress, BatchReport, FileOutcome};
pub use partition::{partition, LineRange, PartitionError};
pub use settings::{AppSettings, SettingsStore, ThemeChoice};
pub use split::{part_file_name, plan_ranges, read_lines, split_file, SplitError, SplitPlan, SplitReport};
