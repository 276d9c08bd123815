//! Named helper functions for document templates.
//!
//! Workflow and notification templates refer to helpers by short names (`newid`, `mappedid`,
//! ...). [`TemplateFunction`] is the closed set of those names; [`crate::TukContext::call`]
//! dispatches a name with string arguments.

use crate::{time, xds, TukContext, TukError, TukResult};
use std::{fmt, str::FromStr};
use tuk_id::UuidService;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateFunction {
    DtDay,
    DtMonth,
    DtYear,
    MappedId,
    PrettyTime,
    NewUuid,
    NewId,
    SplitXdwKey,
    TukTime,
}

impl TemplateFunction {
    pub const ALL: [TemplateFunction; 9] = [
        Self::DtDay,
        Self::DtMonth,
        Self::DtYear,
        Self::MappedId,
        Self::PrettyTime,
        Self::NewUuid,
        Self::NewId,
        Self::SplitXdwKey,
        Self::TukTime,
    ];

    /// The name templates use for this function.
    pub fn name(self) -> &'static str {
        match self {
            Self::DtDay => "dtday",
            Self::DtMonth => "dtmonth",
            Self::DtYear => "dtyear",
            Self::MappedId => "mappedid",
            Self::PrettyTime => "prettytime",
            Self::NewUuid => "newUuid",
            Self::NewId => "newid",
            Self::SplitXdwKey => "splitxdwkey",
            Self::TukTime => "tuktime",
        }
    }

    /// Number of string arguments the function takes.
    pub fn arity(self) -> usize {
        match self {
            Self::MappedId | Self::PrettyTime | Self::SplitXdwKey => 1,
            _ => 0,
        }
    }

    /// Runs the function against `ctx`.
    ///
    /// `splitxdwkey` renders pathway and NHS number separated by a single space.
    ///
    /// # Errors
    ///
    /// Returns [`TukError::InvalidInput`] if `args` does not match [`Self::arity`].
    pub fn invoke(self, ctx: &TukContext, args: &[&str]) -> TukResult<String> {
        if args.len() != self.arity() {
            return Err(TukError::InvalidInput(format!(
                "{} takes {} argument(s), got {}",
                self.name(),
                self.arity(),
                args.len()
            )));
        }

        let out = match self {
            Self::DtDay => time::day(),
            Self::DtMonth => time::month(),
            Self::DtYear => time::year(),
            Self::MappedId => ctx.lookup(args[0]),
            Self::PrettyTime => time::pretty_time(args[0]).to_owned(),
            Self::NewUuid => UuidService::new().to_string(),
            Self::NewId => ctx.new_id(),
            Self::SplitXdwKey => {
                let key = xds::split_xdw_key(args[0]);
                format!("{} {}", key.pathway, key.nhs_id)
            }
            Self::TukTime => time::tuk_time(),
        };
        Ok(out)
    }
}

impl fmt::Display for TemplateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemplateFunction {
    type Err = TukError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| TukError::UnknownFunction(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodeSystem;
    use std::collections::HashMap;
    use tuk_id::{IdRoot, OidGenerator, Seed};

    fn context() -> TukContext {
        let codes = CodeSystem::from_map(HashMap::from([(
            "PAT".to_string(),
            "Patient".to_string(),
        )]));
        let ids = OidGenerator::with_seed(IdRoot::default(), Seed::explicit(100));
        TukContext::with_parts(ids, codes)
    }

    #[test]
    fn test_names_round_trip() {
        for function in TemplateFunction::ALL {
            assert_eq!(function.name().parse::<TemplateFunction>().unwrap(), function);
        }
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_eq!(
            "newUuid".parse::<TemplateFunction>().unwrap(),
            TemplateFunction::NewUuid
        );
        assert!("newuuid".parse::<TemplateFunction>().is_err());
    }

    #[test]
    fn test_unknown_name() {
        let result = "nosuch".parse::<TemplateFunction>();

        match result {
            Err(TukError::UnknownFunction(name)) => assert_eq!(name, "nosuch"),
            other => panic!("Expected UnknownFunction error, got {:?}", other),
        }
    }

    #[test]
    fn test_mappedid() {
        let ctx = context();

        assert_eq!(
            TemplateFunction::MappedId.invoke(&ctx, &["PAT"]).unwrap(),
            "Patient"
        );
        assert_eq!(
            TemplateFunction::MappedId.invoke(&ctx, &["GP"]).unwrap(),
            "GP"
        );
    }

    #[test]
    fn test_newid_uses_context_generator() {
        let ctx = context();

        let first = TemplateFunction::NewId.invoke(&ctx, &[]).unwrap();
        let second = TemplateFunction::NewId.invoke(&ctx, &[]).unwrap();

        assert!(first.ends_with(".100"));
        assert!(second.ends_with(".101"));
    }

    #[test]
    fn test_splitxdwkey() {
        let out = TemplateFunction::SplitXdwKey
            .invoke(&context(), &["POSTNATAL9999999468"])
            .unwrap();

        assert_eq!(out, "POSTNATAL 9999999468");
    }

    #[test]
    fn test_prettytime() {
        let out = TemplateFunction::PrettyTime
            .invoke(&context(), &["2021-10-21 09:00:59.143 +0100"])
            .unwrap();

        assert_eq!(out, "2021-10-21 09:00:59");
    }

    #[test]
    fn test_date_parts() {
        let ctx = context();

        assert_eq!(TemplateFunction::DtYear.invoke(&ctx, &[]).unwrap().len(), 4);
        assert_eq!(TemplateFunction::DtMonth.invoke(&ctx, &[]).unwrap().len(), 2);
        assert_eq!(TemplateFunction::DtDay.invoke(&ctx, &[]).unwrap().len(), 2);
    }

    #[test]
    fn test_new_uuid() {
        let out = TemplateFunction::NewUuid.invoke(&context(), &[]).unwrap();
        assert!(UuidService::is_canonical(&out));
    }

    #[test]
    fn test_wrong_arity() {
        let ctx = context();

        assert!(matches!(
            TemplateFunction::MappedId.invoke(&ctx, &[]),
            Err(TukError::InvalidInput(_))
        ));
        assert!(matches!(
            TemplateFunction::NewId.invoke(&ctx, &["extra"]),
            Err(TukError::InvalidInput(_))
        ));
    }
}
