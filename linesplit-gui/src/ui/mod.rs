mod controls;
mod files;
