pub mod commute_option;
pub mod commute_session;
pub mod employee;
pub mod enrollment;
pub mod office;
pub mod reward;

/*
 One office, many employees. An employee enrolls into commute options and can
 mark one of them as their preferred option for the incentive game. Completed
 commute sessions earn points; rewards are office-level point thresholds.
 Enrollments and sessions are append-only status-transition records, nothing
 is hard-deleted outside cascading removal of the owner row.
 */
