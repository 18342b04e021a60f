pub mod snapshot_export;
