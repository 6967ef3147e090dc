pub mod aggregation_trait;
