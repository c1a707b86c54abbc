pub mod briefing;
