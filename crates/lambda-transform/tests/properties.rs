//! Property tests for recipe generation.

use proptest::prelude::*;

use lambda_model::{
    DependencyProperties, DependencyType, LambdaRuntime, LambdaTemplateParams, Platform,
    PlatformArchitecture, PlatformOs, RecipeEnvelope,
};
use lambda_transform::{LambdaTransformer, RecipeTransformer, exec_args_for};

fn platform_strategy() -> impl Strategy<Value = Platform> {
    let os = prop::sample::select(vec![
        PlatformOs::All,
        PlatformOs::Linux,
        PlatformOs::Windows,
        PlatformOs::Darwin,
    ]);
    let arch = prop::option::of(prop::sample::select(vec![
        PlatformArchitecture::Amd64,
        PlatformArchitecture::Arm,
        PlatformArchitecture::Aarch64,
    ]));
    (os, arch).prop_map(|(os, arch)| match arch {
        Some(arch) => Platform::os(os).with_architecture(arch),
        None => Platform::os(os),
    })
}

fn runtime_strategy() -> impl Strategy<Value = LambdaRuntime> {
    prop::sample::select(LambdaRuntime::ALL.to_vec())
}

fn envelope() -> RecipeEnvelope {
    RecipeEnvelope::new("com.example.Generated", "2.3.4")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn one_manifest_per_platform(
        platforms in prop::collection::vec(platform_strategy(), 1..6),
        runtime in runtime_strategy(),
    ) {
        let params = LambdaTemplateParams::new("arn:aws:lambda:us-east-1:1:function:f", runtime, "h")
            .with_platforms(platforms.clone());
        let recipe = LambdaTransformer::new().transform(&envelope(), &params).unwrap();

        prop_assert_eq!(recipe.manifests.len(), platforms.len());
        for (manifest, platform) in recipe.manifests.iter().zip(&platforms) {
            prop_assert_eq!(&manifest.platform, platform);
            prop_assert_eq!(manifest.artifacts.len(), 1);
        }
    }

    #[test]
    fn dependency_count_adds_three(
        names in prop::collection::btree_set("[a-z]{1,8}\\.[A-Z][a-z]{1,8}", 0..6),
    ) {
        let mut params = LambdaTemplateParams::new("arn", LambdaRuntime::Python38, "h");
        for name in &names {
            params = params.with_dependency(
                name.clone(),
                DependencyProperties::new("1.0.0", DependencyType::Soft),
            );
        }
        let recipe = LambdaTransformer::new().transform(&envelope(), &params).unwrap();
        prop_assert_eq!(recipe.component_dependencies.len(), names.len() + 3);
    }

    #[test]
    fn generation_is_deterministic(
        platforms in prop::collection::vec(platform_strategy(), 1..4),
        runtime in runtime_strategy(),
        args in prop::collection::vec("[a-z-]{1,10}", 0..4),
    ) {
        let params = LambdaTemplateParams::new("arn", runtime, "app.handler")
            .with_platforms(platforms)
            .with_exec_args(args);
        let transformer = LambdaTransformer::new();
        let first = serde_json::to_string(&transformer.transform(&envelope(), &params).unwrap()).unwrap();
        let second = serde_json::to_string(&transformer.transform(&envelope(), &params).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn handler_lands_in_its_slot(
        runtime in runtime_strategy(),
        handler in "[a-zA-Z_][a-zA-Z0-9_.:]{0,20}",
    ) {
        let args = exec_args_for(&handler, runtime).unwrap();
        prop_assert_eq!(args.first().map(String::as_str), Some(runtime.as_str()));
        prop_assert_eq!(args.last().cloned(), Some(format!("--handler={handler}")));
    }
}
