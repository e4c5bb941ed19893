use lambda_runtime::Error;

#[derive(Debug, thiserror::Error)]
pub(crate) enum HandlerError {
    #[error("no records found in S3 event")]
    NoRecords,
    #[error("no bucket name found in S3 event record")]
    MissingBucketName,
    #[error("no object key found in S3 event record")]
    MissingObjectKey,
    #[error("failed to publish notification to {topic_arn}")]
    Publish {
        topic_arn: String,
        #[source]
        source: Error,
    },
}
