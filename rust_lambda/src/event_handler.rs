use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{tracing, Error, LambdaEvent};
use serde::Serialize;

use crate::config::Config;
use crate::error::HandlerError;
use crate::notification::{upload_message, Notification, Publish};

pub(crate) const SUCCESS_MESSAGE: &str = "Lambda function executed successfully";

/// Value handed back to the Lambda runtime after a successful publish.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Response {
    pub fn success() -> Self {
        Self {
            status_code: 200,
            body: serde_json::Value::from(SUCCESS_MESSAGE).to_string(),
        }
    }
}

/// Bucket name and object key of the first record. Later records are ignored.
fn first_upload(event: &S3Event) -> Result<(&str, &str), HandlerError> {
    let record = event.records.first().ok_or(HandlerError::NoRecords)?;
    let bucket_name = record
        .s3
        .bucket
        .name
        .as_deref()
        .ok_or(HandlerError::MissingBucketName)?;
    let object_key = record
        .s3
        .object
        .key
        .as_deref()
        .ok_or(HandlerError::MissingObjectKey)?;
    Ok((bucket_name, object_key))
}

pub(crate) async fn function_handler<P: Publish>(
    event: LambdaEvent<S3Event>,
    publisher: &P,
    config: &Config,
) -> Result<Response, Error> {
    let payload = event.payload;
    let (bucket_name, object_key) = first_upload(&payload).inspect_err(|e| {
        tracing::error!(error = %e, "Malformed S3 event");
    })?;
    tracing::info!(
        bucket = bucket_name,
        key = object_key,
        "{}",
        upload_message(bucket_name, object_key)
    );

    let notification = Notification::object_created(&config.topic_arn, bucket_name, object_key);
    let message_id = publisher.publish(&notification).await.map_err(|source| {
        tracing::error!(error = %source, topic_arn = %notification.topic_arn, "Publish failed");
        HandlerError::Publish {
            topic_arn: notification.topic_arn.clone(),
            source,
        }
    })?;
    tracing::info!(message_id = ?message_id, "Notification published");

    Ok(Response::success())
}
