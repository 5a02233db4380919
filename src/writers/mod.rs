pub mod thermo_log;
