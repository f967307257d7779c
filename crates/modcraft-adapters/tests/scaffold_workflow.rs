//! End-to-end scaffold workflows over the real adapters.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use modcraft_adapters::{
    FixedClock, InMemoryStore, LocalFilesystem, MemoryFilesystem, NoopRefresher, ScriptedPrompter,
    SimpleRenderer,
};
use modcraft_core::{
    application::{ApplicationError, PatchOutcome},
    prelude::*,
};

const COMPOSER: &str = r#"{
    "name": "acme/shop",
    "autoload": {
        "psr-4": {
            "App\\": "app/",
            "Database\\Factories\\": "database/factories/"
        }
    }
}
"#;

const BOOTSTRAP: &str = r#"<?php

use Illuminate\Foundation\Application;

return Application::configure(basePath: dirname(__DIR__))
    ->withProviders([
        \App\Providers\AppServiceProvider::class,
    ])
    ->create();
"#;

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap(),
    )
}

fn service(fs: Box<dyn Filesystem>, base: impl Into<PathBuf>) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(InMemoryStore::with_builtin().unwrap()),
        Box::new(SimpleRenderer::new()),
        fs,
        Box::new(clock()),
        Box::new(NoopRefresher),
    )
    .with_workspace(Workspace::new(base))
}

fn memory_project() -> MemoryFilesystem {
    MemoryFilesystem::new()
        .with_file("composer.json", COMPOSER)
        .with_file("bootstrap/app.php", BOOTSTRAP)
}

fn new_module(svc: &ScaffoldService, name: &str, options: ModuleOptions) {
    svc.create_module(&ModuleRequest {
        name: name.into(),
        options,
        wire_registries: false,
    })
    .unwrap();
}

#[test]
fn controller_scenario() {
    let fs = memory_project();
    let svc = service(Box::new(fs.clone()), "");
    new_module(&svc, "Billing", ModuleOptions::default());

    let report = svc
        .create_controller(&ArtifactRequest::new("Billing", "Invoice"))
        .unwrap();

    let path = "modules/Billing/app/Http/Controllers/InvoiceController.php";
    assert_eq!(report.primary_file(), Some(&PathBuf::from(path)));
    let body = fs.read_file(path).unwrap();
    assert!(body.contains("namespace Modules\\Billing\\App\\Http\\Controllers;"));
    assert!(body.contains("class InvoiceController extends Controller"));
    assert!(body.contains("use App\\Http\\Controllers\\Controller;"));
}

#[test]
fn event_listener_scenario_is_idempotent_on_the_registry() {
    let fs = memory_project();
    let svc = service(Box::new(fs.clone()), "");
    new_module(&svc, "Shop", ModuleOptions::default());

    let request = EventRequest {
        artifact: ArtifactRequest::new("Shop", "OrderPlaced"),
        listener: Some("SendReceipt".into()),
    };
    let first = svc.create_event(&request).unwrap();
    assert_eq!(first.registries[0].outcome, PatchOutcome::Inserted);

    let provider_path = "modules/Shop/app/Providers/EventServiceProvider.php";
    let provider = fs.read_file(provider_path).unwrap();
    assert!(provider.contains(
        "\\Modules\\Shop\\App\\Events\\OrderPlaced::class => [\n            \\Modules\\Shop\\App\\Listeners\\SendReceipt::class,\n        ],"
    ));

    let listener = fs
        .read_file("modules/Shop/app/Listeners/SendReceipt.php")
        .unwrap();
    assert!(listener.contains("use Modules\\Shop\\App\\Events\\OrderPlaced;"));
    assert!(listener.contains("public function handle(OrderPlaced $event): void"));

    let second = svc.create_event(&request).unwrap();
    assert_eq!(second.registries[0].outcome, PatchOutcome::AlreadyPresent);
    assert_eq!(second.skipped.len(), 2);
    assert_eq!(fs.read_file(provider_path).unwrap(), provider);

    // A deleted event file is written again; the map still has one entry.
    fs.remove_file("modules/Shop/app/Events/OrderPlaced.php");
    let third = svc.create_event(&request).unwrap();
    assert_eq!(third.written_files.len(), 1);
    assert_eq!(third.registries[0].outcome, PatchOutcome::AlreadyPresent);
    assert_eq!(fs.read_file(provider_path).unwrap(), provider);
}

#[test]
fn event_without_listener_leaves_placeholder() {
    let fs = memory_project();
    let svc = service(Box::new(fs.clone()), "");
    new_module(&svc, "Shop", ModuleOptions::default());

    svc.create_event(&EventRequest {
        artifact: ArtifactRequest::new("Shop", "CartEmptied"),
        listener: None,
    })
    .unwrap();

    let provider = fs
        .read_file("modules/Shop/app/Providers/EventServiceProvider.php")
        .unwrap();
    assert!(provider.contains("CartEmptied::class => [\n            // Add listeners here\n        ],"));
}

#[test]
fn missing_module_performs_zero_writes() {
    let fs = memory_project();
    let before = fs.list_files();
    let svc = service(Box::new(fs.clone()), "");

    let err = svc
        .create_model(&ModelRequest {
            artifact: ArtifactRequest::new("Ghost", "Post"),
            extras: vec![ModelExtra::Migration],
        })
        .unwrap_err();

    assert!(matches!(
        err,
        ModcraftError::Application(ApplicationError::ModuleNotFound { .. })
    ));
    assert_eq!(fs.list_files(), before);
}

#[test]
fn migration_name_is_timestamped_and_pluralized() {
    let fs = memory_project();
    let svc = service(Box::new(fs.clone()), "");
    new_module(&svc, "Shop", ModuleOptions::default());

    let report = svc
        .create_migration(&MigrationRequest {
            module: "Shop".into(),
            table: "UserProfile".into(),
        })
        .unwrap();

    let path = PathBuf::from(
        "modules/Shop/database/migrations/2024_05_01_120000_create_user_profiles_table.php",
    );
    assert_eq!(report.primary_file(), Some(&path));
    assert!(
        fs.read_file(&path)
            .unwrap()
            .contains("Schema::create('user_profiles'")
    );
}

#[test]
fn module_wiring_on_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    std::fs::create_dir_all(root.join("bootstrap")).unwrap();
    std::fs::write(root.join("composer.json"), COMPOSER).unwrap();
    std::fs::write(root.join("bootstrap/app.php"), BOOTSTRAP).unwrap();

    let svc = service(Box::new(LocalFilesystem::new()), root);
    let request = ModuleRequest {
        name: "billing".into(),
        options: ModuleOptions {
            middleware: true,
            ..ModuleOptions::default()
        },
        wire_registries: true,
    };
    let report = svc.create_module(&request).unwrap();
    assert!(report.refreshed);

    let module = root.join("modules/Billing");
    for dir in ["config", "domain/QueryBuilders", "tests/ArchTest", "app/Http/Middleware"] {
        assert!(module.join(dir).is_dir(), "{dir} missing");
    }
    let provider =
        std::fs::read_to_string(module.join("app/Providers/BillingServiceProvider.php")).unwrap();
    assert!(provider.contains("class BillingServiceProvider extends ServiceProvider"));
    assert!(provider.contains("'billing'"));

    let composer = std::fs::read_to_string(root.join("composer.json")).unwrap();
    assert!(composer.contains(r#""Modules\\Billing\\App\\": "modules/Billing/app/","#));
    assert!(composer.contains(r#""Modules\\Billing\\Domain\\": "modules/Billing/domain/","#));
    assert!(composer.contains(r#""App\\": "app/","#));

    let bootstrap = std::fs::read_to_string(root.join("bootstrap/app.php")).unwrap();
    assert!(bootstrap.contains(
        "->withProviders([\n        \\Modules\\Billing\\App\\Providers\\BillingServiceProvider::class,\n        \\App\\Providers\\AppServiceProvider::class,"
    ));

    let err = svc.create_module(&request).unwrap_err();
    assert!(matches!(
        err,
        ModcraftError::Application(ApplicationError::ModuleAlreadyExists { .. })
    ));
}

#[test]
fn second_write_keeps_first_content_on_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let svc = service(Box::new(LocalFilesystem::new()), tmp.path());
    new_module(&svc, "Billing", ModuleOptions::default());

    let request = ArtifactRequest::new("Billing", "InvoiceResource")
        .in_sub_directory(SubDirectory::parse("v1").unwrap());
    let report = svc.create_http_resource(&request).unwrap();
    let path = report.primary_file().cloned().unwrap();
    assert!(path.ends_with(Path::new("app/Http/Resources/V1/InvoiceResource.php")));

    std::fs::write(&path, "hand edited").unwrap();
    let err = svc.create_http_resource(&request).unwrap_err();
    assert!(matches!(
        err,
        ModcraftError::Application(ApplicationError::ArtifactAlreadyExists { .. })
    ));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hand edited");
}

#[test]
fn model_cascade_from_scripted_answers() {
    let fs = memory_project();
    let svc = service(Box::new(fs.clone()), "");
    new_module(&svc, "Shop", ModuleOptions::default());

    let prompter = ScriptedPrompter::new(["Shop", "catalog", "ProductModel", "migration,factory,controller"]);
    let request = Interview::new(&prompter).model().unwrap();
    let report = svc.create_model(&request).unwrap();

    let files: Vec<_> = report.written_files.iter().map(|p| p.display().to_string()).collect();
    assert_eq!(
        files,
        vec![
            "modules/Shop/app/Models/Catalog/Product.php",
            "modules/Shop/database/migrations/2024_05_01_120000_create_products_table.php",
            "modules/Shop/database/factories/ProductFactory.php",
            "modules/Shop/app/Http/Controllers/Catalog/ProductController.php",
        ]
    );

    let factory = fs
        .read_file("modules/Shop/database/factories/ProductFactory.php")
        .unwrap();
    assert!(factory.contains("namespace Modules\\Shop\\Database\\Factories;"));
    assert!(factory.contains("use Modules\\Shop\\App\\Models\\Catalog\\Product;"));
    assert!(factory.contains("class ProductFactory extends Factory"));
}

#[test]
fn domain_collection_and_request_and_job() {
    let fs = memory_project();
    let svc = service(Box::new(fs.clone()), "");
    new_module(&svc, "Shop", ModuleOptions::default());

    svc.create_domain_collection(&ArtifactRequest::new("Shop", "Orders"))
        .unwrap();
    svc.create_http_request(&ArtifactRequest::new("Shop", "StoreOrderRequest"))
        .unwrap();
    svc.create_job(
        &ArtifactRequest::new("Shop", "ShipOrder")
            .in_sub_directory(SubDirectory::parse("ignored").unwrap()),
    )
    .unwrap();

    assert!(
        fs.read_file("modules/Shop/domain/Collections/OrdersCollection.php")
            .unwrap()
            .contains("namespace Modules\\Shop\\Domain\\Collections;")
    );
    assert!(
        fs.read_file("modules/Shop/app/Http/Requests/StoreOrderRequest.php")
            .is_some()
    );
    assert!(fs.read_file("modules/Shop/app/Jobs/ShipOrder.php").is_some());
}
