use std::future::Future;

use aws_sdk_sns::Client as SnsClient;
use lambda_runtime::Error;

pub(crate) const SUBJECT: &str = "S3 Object Created";

/// A single message bound for an SNS topic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Notification {
    pub topic_arn: String,
    pub subject: String,
    pub message: String,
}

impl Notification {
    pub fn object_created(topic_arn: &str, bucket_name: &str, object_key: &str) -> Self {
        Self {
            topic_arn: topic_arn.to_string(),
            subject: SUBJECT.to_string(),
            message: upload_message(bucket_name, object_key),
        }
    }
}

pub(crate) fn upload_message(bucket_name: &str, object_key: &str) -> String {
    format!("File '{}' was uploaded to bucket '{}'", object_key, bucket_name)
}

/// Resolves to the message id assigned by the service, when it reports one.
pub(crate) trait Publish {
    fn publish(
        &self,
        notification: &Notification,
    ) -> impl Future<Output = Result<Option<String>, Error>> + Send;
}

#[derive(Clone, Debug)]
pub(crate) struct SnsPublisher {
    inner: SnsClient,
}

impl SnsPublisher {
    pub fn new(inner: SnsClient) -> Self {
        Self { inner }
    }
}

impl Publish for SnsPublisher {
    async fn publish(&self, notification: &Notification) -> Result<Option<String>, Error> {
        let output = self
            .inner
            .publish()
            .topic_arn(&notification.topic_arn)
            .subject(&notification.subject)
            .message(&notification.message)
            .send()
            .await?;
        Ok(output.message_id().map(str::to_string))
    }
}
