//! Built-in definition table

use super::definition::Definition;
use crate::types::{Action, Api, Entity};

fn def(
    action: Action,
    entity: Entity,
    api: Api,
    required: &[&str],
    extra: &[&str],
) -> Definition {
    Definition::new(action, entity, api)
        .required(required.iter().copied())
        .extra(extra.iter().copied())
}

/// Every definition shipped with the tool
pub fn builtin_definitions() -> Vec<Definition> {
    use Action::*;

    let mut defs = Vec::new();
    defs.extend(ec2_definitions());
    defs.extend(vec![
        // elbv2
        def(
            Create,
            Entity::LoadBalancer,
            Api::Elbv2,
            &["name", "subnets"],
            &["iptype", "scheme", "securitygroups"],
        ),
        def(Delete, Entity::LoadBalancer, Api::Elbv2, &["id"], &[]),
        def(
            Check,
            Entity::LoadBalancer,
            Api::Elbv2,
            &["id", "state", "timeout"],
            &[],
        ),
        def(
            Create,
            Entity::Listener,
            Api::Elbv2,
            &[
                "actiontype",
                "loadbalancer",
                "port",
                "protocol",
                "targetgroup",
            ],
            &["certificate", "sslpolicy"],
        ),
        def(Delete, Entity::Listener, Api::Elbv2, &["id"], &[]),
        def(
            Create,
            Entity::TargetGroup,
            Api::Elbv2,
            &["name", "port", "protocol", "vpc"],
            &[
                "healthcheckinterval",
                "healthcheckpath",
                "healthcheckport",
                "healthcheckprotocol",
                "healthchecktimeout",
                "healthythreshold",
                "unhealthythreshold",
                "matcher",
            ],
        ),
        def(Delete, Entity::TargetGroup, Api::Elbv2, &["id"], &[]),
        def(
            Attach,
            Entity::Instance,
            Api::Elbv2,
            &["id", "targetgroup"],
            &["port"],
        ),
        def(
            Detach,
            Entity::Instance,
            Api::Elbv2,
            &["id", "targetgroup"],
            &[],
        ),
        // rds
        def(
            Create,
            Entity::Database,
            Api::Rds,
            &["type", "id", "engine", "password", "size", "username"],
            &[
                "autoupgrade",
                "availabilityzone",
                "backupretention",
                "cluster",
                "dbname",
                "dbsecuritygroups",
                "dbsubnetgroup",
                "encrypted",
                "license",
                "multiaz",
                "optiongroup",
                "port",
                "public",
                "storagetype",
                "vpcsecuritygroups",
            ],
        ),
        def(
            Delete,
            Entity::Database,
            Api::Rds,
            &["id"],
            &["skip-snapshot", "snapshot"],
        ),
        def(
            Create,
            Entity::DbSubnetGroup,
            Api::Rds,
            &["description", "name", "subnets"],
            &[],
        ),
        def(Delete, Entity::DbSubnetGroup, Api::Rds, &["id"], &[]),
        // autoscaling
        def(
            Create,
            Entity::LaunchConfiguration,
            Api::Autoscaling,
            &["image", "type", "name"],
            &[
                "keypair",
                "securitygroups",
                "userdata",
                "role",
                "spotprice",
                "public",
            ],
        ),
        def(
            Delete,
            Entity::LaunchConfiguration,
            Api::Autoscaling,
            &["id"],
            &[],
        ),
        def(
            Create,
            Entity::ScalingGroup,
            Api::Autoscaling,
            &[
                "launchconfiguration",
                "max-size",
                "min-size",
                "name",
                "subnets",
            ],
            &[
                "cooldown",
                "desired-capacity",
                "healthcheck-grace-period",
                "healthcheck-type",
                "new-instances-protected",
                "targetgroups",
            ],
        ),
        def(
            Update,
            Entity::ScalingGroup,
            Api::Autoscaling,
            &["name"],
            &[
                "cooldown",
                "desired-capacity",
                "healthcheck-grace-period",
                "healthcheck-type",
                "launchconfiguration",
                "max-size",
                "min-size",
                "new-instances-protected",
                "subnets",
            ],
        ),
        def(
            Delete,
            Entity::ScalingGroup,
            Api::Autoscaling,
            &["id"],
            &["force"],
        ),
        def(
            Check,
            Entity::ScalingGroup,
            Api::Autoscaling,
            &["name", "count", "timeout"],
            &[],
        ),
        def(
            Create,
            Entity::ScalingPolicy,
            Api::Autoscaling,
            &[
                "adjustment-scaling",
                "adjustment-type",
                "name",
                "scalinggroup",
            ],
            &["adjustment-magnitude", "cooldown"],
        ),
        def(
            Delete,
            Entity::ScalingPolicy,
            Api::Autoscaling,
            &["id"],
            &[],
        ),
        // cloudwatch
        def(
            Create,
            Entity::Alarm,
            Api::Cloudwatch,
            &[
                "metric",
                "name",
                "namespace",
                "evaluation-periods",
                "operator",
                "period",
                "statistic-function",
                "threshold",
            ],
            &[
                "enabled",
                "alarm-actions",
                "insufficientdata-actions",
                "ok-actions",
                "description",
                "unit",
                "dimensions",
            ],
        ),
        def(Delete, Entity::Alarm, Api::Cloudwatch, &["name"], &[]),
        def(Start, Entity::Alarm, Api::Cloudwatch, &["names"], &[]),
        def(Stop, Entity::Alarm, Api::Cloudwatch, &["names"], &[]),
        def(
            Attach,
            Entity::Alarm,
            Api::Cloudwatch,
            &["name", "action-arn"],
            &[],
        ),
        def(
            Detach,
            Entity::Alarm,
            Api::Cloudwatch,
            &["name", "action-arn"],
            &[],
        ),
        // s3
        def(Create, Entity::Bucket, Api::S3, &["name"], &[]),
        def(Delete, Entity::Bucket, Api::S3, &["name"], &[]),
        def(
            Update,
            Entity::Bucket,
            Api::S3,
            &["name"],
            &[
                "public-website",
                "redirect-hostname",
                "index-suffix",
                "enforce-https",
                "acl",
            ],
        ),
        def(
            Create,
            Entity::S3Object,
            Api::S3,
            &["bucket", "file"],
            &["name"],
        ),
        def(Delete, Entity::S3Object, Api::S3, &["bucket", "name"], &[]),
        def(
            Update,
            Entity::S3Object,
            Api::S3,
            &["bucket", "name", "acl"],
            &["version"],
        ),
    ]);
    defs.extend(iam_definitions());
    defs.extend(vec![
        // sns
        def(Create, Entity::Topic, Api::Sns, &["name"], &[]),
        def(Delete, Entity::Topic, Api::Sns, &["id"], &[]),
        def(
            Create,
            Entity::Subscription,
            Api::Sns,
            &["endpoint", "protocol", "topic"],
            &[],
        ),
        def(Delete, Entity::Subscription, Api::Sns, &["id"], &[]),
        // sqs
        def(
            Create,
            Entity::Queue,
            Api::Sqs,
            &["name"],
            &[
                "delay",
                "max-msg-size",
                "retention-period",
                "policy",
                "msg-wait",
                "redrive-policy",
                "visibility-timeout",
            ],
        ),
        def(Delete, Entity::Queue, Api::Sqs, &["url"], &[]),
        // route53
        def(
            Create,
            Entity::Zone,
            Api::Route53,
            &["callerreference", "name"],
            &[
                "delegationsetid",
                "comment",
                "isprivate",
                "vpcid",
                "vpcregion",
            ],
        ),
        def(Delete, Entity::Zone, Api::Route53, &["id"], &[]),
        def(
            Create,
            Entity::Record,
            Api::Route53,
            &["name", "ttl", "type", "value", "zone"],
            &["comment"],
        ),
        def(
            Delete,
            Entity::Record,
            Api::Route53,
            &["name", "ttl", "type", "value", "zone"],
            &[],
        ),
        // lambda
        def(
            Create,
            Entity::Function,
            Api::Lambda,
            &["handler", "name", "role", "runtime"],
            &[
                "bucket",
                "object",
                "objectversion",
                "description",
                "memory",
                "publish",
                "timeout",
                "zipfile",
            ],
        ),
        def(Delete, Entity::Function, Api::Lambda, &["id"], &["version"]),
    ]);
    defs
}

fn ec2_definitions() -> Vec<Definition> {
    use Action::*;

    vec![
        def(Create, Entity::Vpc, Api::Ec2, &["cidr"], &["name"]),
        def(Delete, Entity::Vpc, Api::Ec2, &["id"], &[]),
        def(
            Create,
            Entity::Subnet,
            Api::Ec2,
            &["cidr", "vpc"],
            &["availabilityzone", "name"],
        ),
        def(Update, Entity::Subnet, Api::Ec2, &["id"], &["public"]),
        def(Delete, Entity::Subnet, Api::Ec2, &["id"], &[]),
        // "count" repeats on purpose: duplicates collapse on construction
        def(
            Create,
            Entity::Instance,
            Api::Ec2,
            &["image", "count", "count", "type", "subnet"],
            &[
                "keypair",
                "ip",
                "userdata",
                "securitygroup",
                "lock",
                "name",
            ],
        ),
        def(
            Update,
            Entity::Instance,
            Api::Ec2,
            &["id"],
            &["type", "lock"],
        ),
        def(Delete, Entity::Instance, Api::Ec2, &["id"], &[]),
        def(Start, Entity::Instance, Api::Ec2, &["id"], &[]),
        def(Stop, Entity::Instance, Api::Ec2, &["id"], &[]),
        def(
            Check,
            Entity::Instance,
            Api::Ec2,
            &["id", "state", "timeout"],
            &[],
        ),
        def(
            Create,
            Entity::SecurityGroup,
            Api::Ec2,
            &["description", "name", "vpc"],
            &[],
        ),
        def(
            Update,
            Entity::SecurityGroup,
            Api::Ec2,
            &["id", "protocol", "cidr"],
            &["inbound", "outbound", "portrange"],
        ),
        def(Delete, Entity::SecurityGroup, Api::Ec2, &["id"], &[]),
        def(
            Check,
            Entity::SecurityGroup,
            Api::Ec2,
            &["id", "state", "timeout"],
            &[],
        ),
        def(
            Attach,
            Entity::SecurityGroup,
            Api::Ec2,
            &["id", "instance"],
            &[],
        ),
        def(
            Detach,
            Entity::SecurityGroup,
            Api::Ec2,
            &["id", "instance"],
            &[],
        ),
        def(
            Create,
            Entity::Volume,
            Api::Ec2,
            &["availabilityzone", "size"],
            &[],
        ),
        def(
            Check,
            Entity::Volume,
            Api::Ec2,
            &["id", "state", "timeout"],
            &[],
        ),
        def(Delete, Entity::Volume, Api::Ec2, &["id"], &[]),
        def(
            Attach,
            Entity::Volume,
            Api::Ec2,
            &["device", "id", "instance"],
            &[],
        ),
        def(
            Detach,
            Entity::Volume,
            Api::Ec2,
            &["device", "id", "instance"],
            &["force"],
        ),
        def(
            Create,
            Entity::Snapshot,
            Api::Ec2,
            &["volume"],
            &["description"],
        ),
        def(Delete, Entity::Snapshot, Api::Ec2, &["id"], &[]),
        def(
            Copy,
            Entity::Snapshot,
            Api::Ec2,
            &["source-id", "source-region"],
            &["encrypted", "description"],
        ),
        def(
            Create,
            Entity::Image,
            Api::Ec2,
            &["instance", "name"],
            &["description", "reboot"],
        ),
        def(
            Copy,
            Entity::Image,
            Api::Ec2,
            &["name", "source-id", "source-region"],
            &["encrypted", "description"],
        ),
        def(
            Import,
            Entity::Image,
            Api::Ec2,
            &[],
            &[
                "architecture",
                "description",
                "license",
                "platform",
                "role",
                "snapshot",
                "url",
                "bucket",
                "s3object",
            ],
        ),
        def(
            Delete,
            Entity::Image,
            Api::Ec2,
            &["id"],
            &["delete-snapshots"],
        ),
        def(Create, Entity::InternetGateway, Api::Ec2, &[], &[]),
        def(Delete, Entity::InternetGateway, Api::Ec2, &["id"], &[]),
        def(
            Attach,
            Entity::InternetGateway,
            Api::Ec2,
            &["id", "vpc"],
            &[],
        ),
        def(
            Detach,
            Entity::InternetGateway,
            Api::Ec2,
            &["id", "vpc"],
            &[],
        ),
        def(Create, Entity::RouteTable, Api::Ec2, &["vpc"], &[]),
        def(Delete, Entity::RouteTable, Api::Ec2, &["id"], &[]),
        def(Attach, Entity::RouteTable, Api::Ec2, &["id", "subnet"], &[]),
        def(Detach, Entity::RouteTable, Api::Ec2, &["association"], &[]),
        def(
            Create,
            Entity::Route,
            Api::Ec2,
            &["cidr", "gateway", "table"],
            &[],
        ),
        def(Delete, Entity::Route, Api::Ec2, &["cidr", "table"], &[]),
        def(
            Create,
            Entity::Tag,
            Api::Ec2,
            &["resource", "key", "value"],
            &[],
        ),
        def(
            Delete,
            Entity::Tag,
            Api::Ec2,
            &["resource", "key", "value"],
            &[],
        ),
        def(Create, Entity::KeyPair, Api::Ec2, &["name"], &[]),
        def(Delete, Entity::KeyPair, Api::Ec2, &["id"], &[]),
        def(Create, Entity::ElasticIp, Api::Ec2, &["domain"], &[]),
        def(Delete, Entity::ElasticIp, Api::Ec2, &[], &["id", "ip"]),
        def(
            Attach,
            Entity::ElasticIp,
            Api::Ec2,
            &["id"],
            &[
                "instance",
                "networkinterface",
                "privateip",
                "allow-reassociation",
            ],
        ),
        def(Detach, Entity::ElasticIp, Api::Ec2, &["association"], &[]),
    ]
}

fn iam_definitions() -> Vec<Definition> {
    use Action::*;

    vec![
        def(Create, Entity::User, Api::Iam, &["name"], &[]),
        def(Delete, Entity::User, Api::Iam, &["name"], &[]),
        def(Attach, Entity::User, Api::Iam, &["group", "name"], &[]),
        def(Detach, Entity::User, Api::Iam, &["group", "name"], &[]),
        def(Create, Entity::AccessKey, Api::Iam, &["user"], &[]),
        def(Delete, Entity::AccessKey, Api::Iam, &["id"], &["user"]),
        def(Create, Entity::Group, Api::Iam, &["name"], &[]),
        def(Delete, Entity::Group, Api::Iam, &["name"], &[]),
        def(
            Create,
            Entity::Role,
            Api::Iam,
            &["name"],
            &[
                "principal-account",
                "principal-user",
                "principal-service",
                "sleep-after",
                "conditions",
            ],
        ),
        def(Delete, Entity::Role, Api::Iam, &["name"], &[]),
        def(
            Attach,
            Entity::Role,
            Api::Iam,
            &["instanceprofile", "name"],
            &[],
        ),
        def(
            Detach,
            Entity::Role,
            Api::Iam,
            &["instanceprofile", "name"],
            &[],
        ),
        def(
            Create,
            Entity::Policy,
            Api::Iam,
            &["name", "effect", "action", "resource"],
            &["description", "conditions"],
        ),
        def(
            Delete,
            Entity::Policy,
            Api::Iam,
            &["arn"],
            &["all-versions"],
        ),
        def(
            Attach,
            Entity::Policy,
            Api::Iam,
            &[],
            &["arn", "user", "group", "role", "service", "access"],
        ),
        def(
            Detach,
            Entity::Policy,
            Api::Iam,
            &["arn"],
            &["user", "group", "role"],
        ),
    ]
}
