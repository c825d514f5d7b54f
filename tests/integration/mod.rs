mod controller_flow;
mod invariants;
mod navigation_scenarios;
