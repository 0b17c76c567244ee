pub mod sprintgoal;
