//! Built-in stubs and stub directory discovery.
//!
//! Every [`TemplateId`] has a built-in body so modcraft works in a project
//! that never published its own stubs. A project overrides any of them by
//! dropping `<id>.stub` into its stub directory.
//!
//! # Stub directory resolution order
//!
//! [`discover_stub_dir`] probes, stopping at the first directory that exists:
//!
//! 1. **`$MODCRAFT_STUBS_DIR`** - environment variable override.
//! 2. **`<base>/<configured>`** - `paths.stubs_dir` from configuration,
//!    relative to the project root (default `stubs`).
//! 3. **`<executable-dir>/stubs`** - sibling to the `modcraft` binary.
//!
//! If none exists the built-in bodies are used alone.

use std::path::{Path, PathBuf};

use tracing::debug;

use modcraft_core::domain::{Template, TemplateId};

/// Environment variable naming an explicit stub directory.
pub const STUBS_DIR_ENV: &str = "MODCRAFT_STUBS_DIR";

/// All built-in stubs, one per [`TemplateId`].
pub fn all_templates() -> Vec<Template> {
    TemplateId::ALL
        .into_iter()
        .map(|id| Template::builtin(id, body(id)))
        .collect()
}

/// Built-in body for `id`.
pub fn body(id: TemplateId) -> &'static str {
    match id {
        TemplateId::Controller => CONTROLLER,
        TemplateId::Model => MODEL,
        TemplateId::Event => EVENT,
        TemplateId::Listener => LISTENER,
        TemplateId::Job => JOB,
        TemplateId::Migration => MIGRATION,
        TemplateId::Request => REQUEST,
        TemplateId::Resource => RESOURCE,
        TemplateId::DomainCollection => DOMAIN_COLLECTION,
        TemplateId::Factory => FACTORY,
        TemplateId::Seeder => SEEDER,
        TemplateId::ModuleConfig => MODULE_CONFIG,
        TemplateId::RouteWeb => ROUTE_WEB,
        TemplateId::RouteApi => ROUTE_API,
        TemplateId::RouteServiceProvider => ROUTE_SERVICE_PROVIDER,
        TemplateId::EventServiceProvider => EVENT_SERVICE_PROVIDER,
        TemplateId::ModuleServiceProvider => MODULE_SERVICE_PROVIDER,
    }
}

/// First existing stub directory in resolution order, if any.
pub fn discover_stub_dir(base: &Path, configured: &Path) -> Option<PathBuf> {
    candidate_paths(base, configured).into_iter().find(|candidate| {
        let found = candidate.is_dir();
        debug!(path = %candidate.display(), found, "checking stub directory candidate");
        found
    })
}

fn candidate_paths(base: &Path, configured: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);

    if let Ok(env_dir) = std::env::var(STUBS_DIR_ENV) {
        paths.push(PathBuf::from(env_dir));
    }

    paths.push(base.join(configured));

    if let Some(exe_sibling) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("stubs")))
    {
        paths.push(exe_sibling);
    }

    paths
}

// ── Stub bodies ──────────────────────────────────────────────────────────────

const CONTROLLER: &str = r#"<?php

namespace {{ namespace }};

use {{ rootNamespace }}Http\Controllers\Controller;
use Illuminate\Http\Request;

class {{ class }} extends Controller
{
    /**
     * Display a listing of the resource.
     */
    public function index()
    {
        //
    }

    /**
     * Store a newly created resource in storage.
     */
    public function store(Request $request)
    {
        //
    }

    /**
     * Display the specified resource.
     */
    public function show(string $id)
    {
        //
    }

    /**
     * Update the specified resource in storage.
     */
    public function update(Request $request, string $id)
    {
        //
    }

    /**
     * Remove the specified resource from storage.
     */
    public function destroy(string $id)
    {
        //
    }
}
"#;

const MODEL: &str = r#"<?php

namespace {{ namespace }};

use Illuminate\Database\Eloquent\Factories\HasFactory;
use Illuminate\Database\Eloquent\Model;

class {{ class }} extends Model
{
    use HasFactory;
}
"#;

const EVENT: &str = r#"<?php

namespace {{ namespace }};

use Illuminate\Broadcasting\InteractsWithSockets;
use Illuminate\Foundation\Events\Dispatchable;
use Illuminate\Queue\SerializesModels;

class {{ class }}
{
    use Dispatchable, InteractsWithSockets, SerializesModels;

    /**
     * Create a new event instance.
     */
    public function __construct()
    {
        //
    }
}
"#;

const LISTENER: &str = r#"<?php

namespace {{ namespace }};

use {{ eventPath }};

class {{ class }}
{
    /**
     * Create the event listener.
     */
    public function __construct()
    {
        //
    }

    /**
     * Handle the event.
     */
    public function handle({{ event }} $event): void
    {
        //
    }
}
"#;

const JOB: &str = r#"<?php

namespace {{ namespace }};

use Illuminate\Bus\Queueable;
use Illuminate\Contracts\Queue\ShouldQueue;
use Illuminate\Foundation\Bus\Dispatchable;
use Illuminate\Queue\InteractsWithQueue;
use Illuminate\Queue\SerializesModels;

class {{ class }} implements ShouldQueue
{
    use Dispatchable, InteractsWithQueue, Queueable, SerializesModels;

    /**
     * Create a new job instance.
     */
    public function __construct()
    {
        //
    }

    /**
     * Execute the job.
     */
    public function handle(): void
    {
        //
    }
}
"#;

const MIGRATION: &str = r#"<?php

use Illuminate\Database\Migrations\Migration;
use Illuminate\Database\Schema\Blueprint;
use Illuminate\Support\Facades\Schema;

return new class extends Migration
{
    /**
     * Run the migrations.
     */
    public function up(): void
    {
        Schema::create('{{ table }}', function (Blueprint $table) {
            $table->id();
            $table->timestamps();
        });
    }

    /**
     * Reverse the migrations.
     */
    public function down(): void
    {
        Schema::dropIfExists('{{ table }}');
    }
};
"#;

const REQUEST: &str = r#"<?php

namespace {{ namespace }};

use Illuminate\Foundation\Http\FormRequest;

class {{ class }} extends FormRequest
{
    /**
     * Determine if the user is authorized to make this request.
     */
    public function authorize(): bool
    {
        return false;
    }

    /**
     * Get the validation rules that apply to the request.
     *
     * @return array<string, \Illuminate\Contracts\Validation\ValidationRule|array<mixed>|string>
     */
    public function rules(): array
    {
        return [
            //
        ];
    }
}
"#;

const RESOURCE: &str = r#"<?php

namespace {{ namespace }};

use Illuminate\Http\Request;
use Illuminate\Http\Resources\Json\JsonResource;

class {{ class }} extends JsonResource
{
    /**
     * Transform the resource into an array.
     *
     * @return array<string, mixed>
     */
    public function toArray(Request $request): array
    {
        return parent::toArray($request);
    }
}
"#;

const DOMAIN_COLLECTION: &str = r#"<?php

namespace {{ namespace }};

use Illuminate\Support\Collection;

class {{ class }} extends Collection
{
    //
}
"#;

const FACTORY: &str = r#"<?php

namespace {{ factoryNamespace }};

use Illuminate\Database\Eloquent\Factories\Factory;
use {{ namespacedModelPath }};

/**
 * @extends Factory<{{ namespacedModel }}>
 */
class {{ factory }}Factory extends Factory
{
    protected $model = {{ namespacedModel }}::class;

    /**
     * Define the model's default state.
     *
     * @return array<string, mixed>
     */
    public function definition(): array
    {
        return [
            //
        ];
    }
}
"#;

const SEEDER: &str = r#"<?php

namespace {{ namespace }};

use Illuminate\Database\Seeder;

class {{ class }} extends Seeder
{
    /**
     * Run the database seeds.
     */
    public function run(): void
    {
        //
    }
}
"#;

const MODULE_CONFIG: &str = r#"<?php

return [
    //
];
"#;

const ROUTE_WEB: &str = r#"<?php

use Illuminate\Support\Facades\Route;

/*
|--------------------------------------------------------------------------
| Web Routes
|--------------------------------------------------------------------------
*/
"#;

const ROUTE_API: &str = r#"<?php

use Illuminate\Support\Facades\Route;

/*
|--------------------------------------------------------------------------
| API Routes
|--------------------------------------------------------------------------
*/
"#;

const ROUTE_SERVICE_PROVIDER: &str = r#"<?php

namespace {{ namespace }};

use Illuminate\Foundation\Support\Providers\RouteServiceProvider as ServiceProvider;
use Illuminate\Support\Facades\Route;

class RouteServiceProvider extends ServiceProvider
{
    /**
     * Define your route model bindings, pattern filters, and other route configuration.
     */
    public function boot(): void
    {
        $this->routes(function () {
            Route::middleware('api')
                ->prefix('api')
                ->group(__DIR__.'/../../routes/api.php');

            Route::middleware('web')
                ->group(__DIR__.'/../../routes/web.php');
        });
    }
}
"#;

const EVENT_SERVICE_PROVIDER: &str = r#"<?php

namespace {{ namespace }};

use Illuminate\Foundation\Support\Providers\EventServiceProvider as ServiceProvider;

class EventServiceProvider extends ServiceProvider
{
    /**
     * The event to listener mappings for the module.
     *
     * @var array<class-string, array<int, class-string>>
     */
    protected $listen = [
    ];

    /**
     * Determine if events and listeners should be automatically discovered.
     */
    public function shouldDiscoverEvents(): bool
    {
        return false;
    }
}
"#;

const MODULE_SERVICE_PROVIDER: &str = r#"<?php

namespace {{ namespace }};

use Illuminate\Support\ServiceProvider;

class {{ class }} extends ServiceProvider
{
    /**
     * Register services.
     */
    public function register(): void
    {
        $this->mergeConfigFrom(__DIR__.'/../../config/config.php', '{{ key }}');

        $this->app->register(RouteServiceProvider::class);
        $this->app->register(EventServiceProvider::class);
    }

    /**
     * Bootstrap services.
     */
    public function boot(): void
    {
        $this->loadMigrationsFrom(__DIR__.'/../../database/migrations');
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_has_a_php_body() {
        let templates = all_templates();
        assert_eq!(templates.len(), TemplateId::ALL.len());
        for t in templates {
            assert!(t.body().starts_with("<?php"), "{} has no php tag", t.id);
        }
    }

    #[test]
    fn class_stubs_use_class_placeholder() {
        for id in [
            TemplateId::Controller,
            TemplateId::Model,
            TemplateId::Job,
            TemplateId::ModuleServiceProvider,
        ] {
            assert!(body(id).contains("{{ class }}"), "{id}");
        }
    }

    #[test]
    fn event_service_provider_carries_listener_anchor() {
        assert!(body(TemplateId::EventServiceProvider).contains("protected $listen = ["));
    }

    #[test]
    fn configured_dir_is_found() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("stubs")).unwrap();
        let found = discover_stub_dir(tmp.path(), Path::new("stubs"));
        // MODCRAFT_STUBS_DIR may point elsewhere on a developer machine.
        if std::env::var(STUBS_DIR_ENV).is_err() {
            assert_eq!(found, Some(tmp.path().join("stubs")));
        }
    }
}
