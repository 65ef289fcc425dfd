mod input_date;
mod input_tag;
mod menu;
mod progress;
mod sidebar;
mod stepper;
mod tab;
mod toggles;
