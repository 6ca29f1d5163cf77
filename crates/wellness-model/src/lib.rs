pub mod answers;
pub mod cluster;
pub mod codes;
pub mod destination;
pub mod question;
pub mod score;

pub use answers::AnswerSet;
pub use cluster::{Cluster, ClusterProfile, cluster_profiles};
pub use codes::{DEFAULT_THEME_CODE, region_name, theme_name};
pub use destination::{Affinity, Destination, NearbySpot};
pub use question::{Question, QuestionId, question, questions};
pub use score::{Classification, ScoreVector};
