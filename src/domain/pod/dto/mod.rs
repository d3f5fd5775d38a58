pub mod pod_summary;
