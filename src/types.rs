//! Core type definitions for cloudtmpl

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Resource entity kinds recognized in templates.
///
/// The vocabulary is closed: any name outside this enum is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    /// Sentinel for entity-less actions
    None,
    /// IAM access key
    AccessKey,
    /// CloudWatch alarm
    Alarm,
    /// Auto scaling group
    ScalingGroup,
    /// S3 bucket
    Bucket,
    /// RDS database instance
    Database,
    /// RDS subnet group
    DbSubnetGroup,
    /// Elastic IP address
    ElasticIp,
    /// Lambda function
    Function,
    /// IAM group
    Group,
    /// EC2 instance
    Instance,
    /// Machine image
    Image,
    /// VPC internet gateway
    InternetGateway,
    /// SSH keypair
    KeyPair,
    /// Auto scaling launch configuration
    LaunchConfiguration,
    /// Load balancer listener
    Listener,
    /// Load balancer
    LoadBalancer,
    /// IAM policy
    Policy,
    /// SQS queue
    Queue,
    /// Route53 record
    Record,
    /// IAM role
    Role,
    /// Route table entry
    Route,
    /// Route table
    RouteTable,
    /// Object stored in a bucket
    S3Object,
    /// Auto scaling policy
    ScalingPolicy,
    /// Security group
    SecurityGroup,
    /// Volume snapshot
    Snapshot,
    /// VPC subnet
    Subnet,
    /// SNS subscription
    Subscription,
    /// Resource tag
    Tag,
    /// Load balancer target group
    TargetGroup,
    /// SNS topic
    Topic,
    /// IAM user
    User,
    /// Block storage volume
    Volume,
    /// Virtual private cloud
    Vpc,
    /// Route53 hosted zone
    Zone,
}

impl Entity {
    /// Every entity, in declaration order
    pub const ALL: [Entity; 36] = [
        Entity::None,
        Entity::AccessKey,
        Entity::Alarm,
        Entity::ScalingGroup,
        Entity::Bucket,
        Entity::Database,
        Entity::DbSubnetGroup,
        Entity::ElasticIp,
        Entity::Function,
        Entity::Group,
        Entity::Instance,
        Entity::Image,
        Entity::InternetGateway,
        Entity::KeyPair,
        Entity::LaunchConfiguration,
        Entity::Listener,
        Entity::LoadBalancer,
        Entity::Policy,
        Entity::Queue,
        Entity::Record,
        Entity::Role,
        Entity::Route,
        Entity::RouteTable,
        Entity::S3Object,
        Entity::ScalingPolicy,
        Entity::SecurityGroup,
        Entity::Snapshot,
        Entity::Subnet,
        Entity::Subscription,
        Entity::Tag,
        Entity::TargetGroup,
        Entity::Topic,
        Entity::User,
        Entity::Volume,
        Entity::Vpc,
        Entity::Zone,
    ];

    /// Canonical template name of the entity
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::None => "none",
            Entity::AccessKey => "accesskey",
            Entity::Alarm => "alarm",
            Entity::ScalingGroup => "scalinggroup",
            Entity::Bucket => "bucket",
            Entity::Database => "database",
            Entity::DbSubnetGroup => "dbsubnetgroup",
            Entity::ElasticIp => "elasticip",
            Entity::Function => "function",
            Entity::Group => "group",
            Entity::Instance => "instance",
            Entity::Image => "image",
            Entity::InternetGateway => "internetgateway",
            Entity::KeyPair => "keypair",
            Entity::LaunchConfiguration => "launchconfiguration",
            Entity::Listener => "listener",
            Entity::LoadBalancer => "loadbalancer",
            Entity::Policy => "policy",
            Entity::Queue => "queue",
            Entity::Record => "record",
            Entity::Role => "role",
            Entity::Route => "route",
            Entity::RouteTable => "routetable",
            Entity::S3Object => "s3object",
            Entity::ScalingPolicy => "scalingpolicy",
            Entity::SecurityGroup => "securitygroup",
            Entity::Snapshot => "snapshot",
            Entity::Subnet => "subnet",
            Entity::Subscription => "subscription",
            Entity::Tag => "tag",
            Entity::TargetGroup => "targetgroup",
            Entity::Topic => "topic",
            Entity::User => "user",
            Entity::Volume => "volume",
            Entity::Vpc => "vpc",
            Entity::Zone => "zone",
        }
    }

    /// Iterate over the whole vocabulary
    pub fn all() -> impl Iterator<Item = Entity> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Entity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| Error::UnknownEntity(s.to_string()))
    }
}

/// Verbs a template command can apply to an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Create a resource
    Create,
    /// Delete a resource
    Delete,
    /// Update a resource in place
    Update,
    /// Start a stopped resource
    Start,
    /// Stop a running resource
    Stop,
    /// Attach a resource to another
    Attach,
    /// Detach a resource from another
    Detach,
    /// Wait for a resource to reach a state
    Check,
    /// Copy a resource
    Copy,
    /// Import a resource from an external source
    Import,
}

impl Action {
    /// Every action, in declaration order
    pub const ALL: [Action; 10] = [
        Action::Create,
        Action::Delete,
        Action::Update,
        Action::Start,
        Action::Stop,
        Action::Attach,
        Action::Detach,
        Action::Check,
        Action::Copy,
        Action::Import,
    ];

    /// Canonical template verb
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Delete => "delete",
            Action::Update => "update",
            Action::Start => "start",
            Action::Stop => "stop",
            Action::Attach => "attach",
            Action::Detach => "detach",
            Action::Check => "check",
            Action::Copy => "copy",
            Action::Import => "import",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| Error::UnknownAction(s.to_string()))
    }
}

/// Provider API namespace implementing a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Api {
    /// Compute and networking
    Ec2,
    /// Object storage
    S3,
    /// Identity and access management
    Iam,
    /// Load balancing
    Elbv2,
    /// Managed databases
    Rds,
    /// Auto scaling
    Autoscaling,
    /// Notifications
    Sns,
    /// Queues
    Sqs,
    /// DNS
    Route53,
    /// Functions
    Lambda,
    /// Monitoring
    Cloudwatch,
}

impl Api {
    /// Canonical namespace name
    pub fn as_str(&self) -> &'static str {
        match self {
            Api::Ec2 => "ec2",
            Api::S3 => "s3",
            Api::Iam => "iam",
            Api::Elbv2 => "elbv2",
            Api::Rds => "rds",
            Api::Autoscaling => "autoscaling",
            Api::Sns => "sns",
            Api::Sqs => "sqs",
            Api::Route53 => "route53",
            Api::Lambda => "lambda",
            Api::Cloudwatch => "cloudwatch",
        }
    }
}

impl std::fmt::Display for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Api {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Api::Ec2,
            Api::S3,
            Api::Iam,
            Api::Elbv2,
            Api::Rds,
            Api::Autoscaling,
            Api::Sns,
            Api::Sqs,
            Api::Route53,
            Api::Lambda,
            Api::Cloudwatch,
        ]
        .into_iter()
        .find(|api| api.as_str() == s)
        .ok_or_else(|| Error::UnknownApi(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_entity_names_are_unique() {
        let names: HashSet<_> = Entity::all().map(|e| e.as_str()).collect();
        assert_eq!(names.len(), Entity::ALL.len());
    }

    #[test]
    fn test_entity_from_str() {
        assert_eq!("instance".parse::<Entity>().unwrap(), Entity::Instance);
        assert_eq!("none".parse::<Entity>().unwrap(), Entity::None);
        assert!(matches!(
            "Instance".parse::<Entity>(),
            Err(Error::UnknownEntity(_))
        ));
    }

    #[test]
    fn test_entity_serde_matches_display() {
        for entity in Entity::all() {
            let json = serde_json::to_string(&entity).unwrap();
            assert_eq!(json, format!("\"{}\"", entity));
        }
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Create.to_string(), "create");
        assert_eq!("detach".parse::<Action>().unwrap(), Action::Detach);
        assert!("destroy".parse::<Action>().is_err());
    }

    #[test]
    fn test_api_round_trip() {
        assert_eq!("route53".parse::<Api>().unwrap(), Api::Route53);
        assert_eq!(Api::Elbv2.to_string(), "elbv2");
        assert!(matches!("ec3".parse::<Api>(), Err(Error::UnknownApi(_))));
    }
}
