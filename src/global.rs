//! Conditions on the global `aws:` condition keys, available for every service.
//!
//! Each helper takes the value(s) to compare against and an optional operator. When the operator is omitted, the
//! operator IAM documents as the usual choice for that key is used.
//!
//! See <https://docs.aws.amazon.com/IAM/latest/UserGuide/reference_policies_condition-keys.html>.

use crate::{condop, Operator, StatementBuilder, StringList};

impl StatementBuilder {
    fn if_aws<V: Into<StringList>>(
        &mut self,
        key: &str,
        value: V,
        operator: Option<Operator>,
        default: Operator,
    ) -> &mut Self {
        self.with_condition(key, value, Some(operator.unwrap_or(default)))
    }

    /// Compare the services that made requests on the principal's behalf. Defaults to `ForAnyValue:StringEquals`.
    pub fn if_aws_called_via<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:CalledVia", value, operator, Operator::for_any_value(condop::StringEquals))
    }

    /// Compare the first service that made a request on the principal's behalf. Defaults to `StringLike`.
    pub fn if_aws_called_via_first<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:CalledViaFirst", value, operator, condop::StringLike.into())
    }

    /// Compare the last service that made a request on the principal's behalf. Defaults to `StringLike`.
    pub fn if_aws_called_via_last<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:CalledViaLast", value, operator, condop::StringLike.into())
    }

    /// Compare the date and time of the request. Accepts ISO 8601 strings or [chrono::DateTime] values. Defaults to
    /// `DateLessThanEquals`.
    pub fn if_aws_current_time<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:CurrentTime", value, operator, condop::DateLessThanEquals.into())
    }

    /// Compare the date and time of the request in epoch time. Accepts numbers, ISO 8601 strings, or
    /// [chrono::DateTime] values. Defaults to `DateLessThanEquals`.
    pub fn if_aws_epoch_time<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:EpochTime", value, operator, condop::DateLessThanEquals.into())
    }

    /// Compare the number of seconds since the principal authenticated with MFA. Defaults to `NumericLessThan`.
    pub fn if_aws_multi_factor_auth_age<V: Into<StringList>>(
        &mut self,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        self.if_aws("aws:MultiFactorAuthAge", value, operator, condop::NumericLessThan.into())
    }

    /// Check whether MFA was used to validate the temporary credentials of the request. Value defaults to `true`.
    pub fn if_aws_multi_factor_auth_present(&mut self, value: Option<bool>) -> &mut Self {
        self.if_bool_key("aws:MultiFactorAuthPresent", value)
    }

    pub fn if_aws_principal_account<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:PrincipalAccount", value, operator, condop::StringLike.into())
    }

    /// Compare the ARN of the principal that made the request. Defaults to `ArnLike`.
    pub fn if_aws_principal_arn<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:PrincipalArn", value, operator, condop::ArnLike.into())
    }

    pub fn if_aws_principal_org_id<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:PrincipalOrgID", value, operator, condop::StringLike.into())
    }

    pub fn if_aws_principal_org_paths<V: Into<StringList>>(
        &mut self,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        self.if_aws("aws:PrincipalOrgPaths", value, operator, condop::StringLike.into())
    }

    /// Compare the tag `tag_key` attached to the principal making the request.
    pub fn if_aws_principal_tag<V: Into<StringList>>(
        &mut self,
        tag_key: &str,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        let key = format!("aws:PrincipalTag/{}", tag_key);
        self.if_aws(&key, value, operator, condop::StringLike.into())
    }

    pub fn if_aws_principal_type<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:PrincipalType", value, operator, condop::StringLike.into())
    }

    pub fn if_aws_referer<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:Referer", value, operator, condop::StringLike.into())
    }

    pub fn if_aws_requested_region<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:RequestedRegion", value, operator, condop::StringLike.into())
    }

    /// Compare the tag `tag_key` passed in the request.
    pub fn if_aws_request_tag<V: Into<StringList>>(
        &mut self,
        tag_key: &str,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        let key = format!("aws:RequestTag/{}", tag_key);
        self.if_aws(&key, value, operator, condop::StringLike.into())
    }

    /// Compare the tag `tag_key` attached to the resource.
    pub fn if_aws_resource_tag<V: Into<StringList>>(
        &mut self,
        tag_key: &str,
        value: V,
        operator: Option<Operator>,
    ) -> &mut Self {
        let key = format!("aws:ResourceTag/{}", tag_key);
        self.if_aws(&key, value, operator, condop::StringLike.into())
    }

    /// Check whether the request was sent using SSL. Value defaults to `true`.
    pub fn if_aws_secure_transport(&mut self, value: Option<bool>) -> &mut Self {
        self.if_bool_key("aws:SecureTransport", value)
    }

    pub fn if_aws_source_account<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:SourceAccount", value, operator, condop::StringLike.into())
    }

    /// Compare the ARN of the resource making a service-to-service request. Defaults to `ArnLike`.
    pub fn if_aws_source_arn<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:SourceArn", value, operator, condop::ArnLike.into())
    }

    /// Compare the requester's IP address. Accepts CIDR strings or [ipnet::IpNet] values. Defaults to `IpAddress`.
    pub fn if_aws_source_ip<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:SourceIp", value, operator, condop::IpAddress.into())
    }

    pub fn if_aws_source_vpc<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:SourceVpc", value, operator, condop::StringLike.into())
    }

    pub fn if_aws_source_vpce<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:SourceVpce", value, operator, condop::StringLike.into())
    }

    /// Compare the tag keys in the request. Multivalued; pass a set operator such as `ForAllValues:StringEquals` to
    /// test every key.
    pub fn if_aws_tag_keys<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:TagKeys", value, operator, condop::StringLike.into())
    }

    /// Compare the date and time that temporary credentials were issued. Defaults to `DateGreaterThanEquals`.
    pub fn if_aws_token_issue_time<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:TokenIssueTime", value, operator, condop::DateGreaterThanEquals.into())
    }

    pub fn if_aws_user_agent<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:UserAgent", value, operator, condop::StringLike.into())
    }

    pub fn if_aws_userid<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:userid", value, operator, condop::StringLike.into())
    }

    pub fn if_aws_username<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:username", value, operator, condop::StringLike.into())
    }

    /// Check whether an AWS service made the request on the principal's behalf. Value defaults to `true`.
    pub fn if_aws_via_aws_service(&mut self, value: Option<bool>) -> &mut Self {
        self.if_bool_key("aws:ViaAWSService", value)
    }

    /// Compare the requester's IP address as seen from a VPC endpoint. Defaults to `IpAddress`.
    pub fn if_aws_vpc_source_ip<V: Into<StringList>>(&mut self, value: V, operator: Option<Operator>) -> &mut Self {
        self.if_aws("aws:VpcSourceIp", value, operator, condop::IpAddress.into())
    }
}
