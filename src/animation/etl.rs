use crate::error::SequencerError;
use crate::sequencer::{Sequencer, Step, TickPolicy};
use serde_json::json;

/// Extract, transform, load. Each step lasts its own duration.
pub fn steps() -> Vec<Step> {
    vec![
        Step::new("extract", "etl.extract.title", "etl.extract.description", 2000).with_details(
            json!({
                "sources": [
                    {
                        "type": "PostgreSQL",
                        "table": "sales_transactions",
                        "query": "SELECT * FROM sales_transactions WHERE date >= $1",
                        "parameters": ["2024-01-01"],
                        "estimatedRows": "1.2M",
                    },
                    {
                        "type": "MongoDB",
                        "collection": "customer_interactions",
                        "query": "{ date: { $gte: ISODate(\"2024-01-01\") } }",
                        "estimatedDocs": "850K",
                    },
                    {
                        "type": "S3",
                        "bucket": "raw-data",
                        "files": ["logs/*.parquet", "metrics/*.json"],
                        "totalSize": "2.8GB",
                    },
                ],
                "performance": {
                    "parallelJobs": 3,
                    "batchSize": "10000",
                    "readThroughput": "15MB/s",
                },
                "monitoring": {
                    "activeConnections": 5,
                    "queuedJobs": 2,
                    "memoryUsage": "45%",
                },
            }),
        ),
        Step::new(
            "transform",
            "etl.transform.title",
            "etl.transform.description",
            2500,
        )
        .with_details(json!({
            "operations": [
                {
                    "type": "Data Cleaning",
                    "steps": [
                        "Remove duplicate records",
                        "Handle NULL values",
                        "Standardize date formats",
                        "Validate data types",
                    ],
                },
                {
                    "type": "Data Enrichment",
                    "steps": [
                        "Geocoding addresses",
                        "Currency conversion",
                        "Customer segmentation",
                        "Sentiment analysis",
                    ],
                },
                {
                    "type": "Aggregations",
                    "steps": [
                        "Daily sales summaries",
                        "Customer behavior metrics",
                        "Product performance stats",
                        "Regional analysis",
                    ],
                },
            ],
            "metrics": {
                "processedRecords": "2.05M",
                "invalidRecords": "1.2K",
                "transformationTime": "45min",
                "cpuUtilization": "78%",
            },
            "quality": {
                "completeness": "99.8%",
                "accuracy": "99.9%",
                "consistency": "99.7%",
            },
        })),
        Step::new("load", "etl.load.title", "etl.load.description", 2000).with_details(json!({
            "destinations": [
                {
                    "type": "Data Warehouse",
                    "target": "Snowflake",
                    "schema": "analytics_prod",
                    "tables": ["fact_sales", "dim_customers"],
                    "loadStrategy": "Incremental",
                },
                {
                    "type": "Data Lake",
                    "target": "S3",
                    "path": "processed/2024/Q1",
                    "format": "Parquet",
                    "partitioning": ["date", "region"],
                },
                {
                    "type": "Cache",
                    "target": "Redis",
                    "keyPattern": "analytics:*",
                    "ttl": "24h",
                },
            ],
            "performance": {
                "writeSpeed": "25MB/s",
                "compressionRatio": "4.2:1",
                "concurrentLoads": 3,
            },
            "validation": {
                "rowCounts": "Matched",
                "checksums": "Verified",
                "constraints": "Enforced",
            },
        })),
    ]
}

pub fn sequencer() -> Result<Sequencer, SequencerError> {
    Sequencer::new(steps(), TickPolicy::PerStep)
}
