//! Patch catalog for the React client
//!
//! The React client renders entity pages from `.tsx` modules backed by
//! redux reducers, so the tenant wiring goes through the management reducer
//! instead of an injected service.

use super::{CatalogVerb, FilePatch, Guard, PatchOp};

pub(super) const CATALOG: &[FilePatch] = &[
    // Detail page: tenant row before the closing definition list
    FilePatch {
        path: "{{ webapp_dir }}app/entities/{{ entity.kebab }}/{{ entity.kebab }}-detail.tsx",
        guard: Guard::Always,
        ops: &[PatchOp {
            verb: CatalogVerb::InsertBefore,
            anchor: "</dl>",
            template: r#"<dt>{{ tenant.upper_first }}</dt>
          <dd>{{ '{{' }}{{ entity.lower_first }}Entity.{{ tenant.lower_first }} ? {{ entity.lower_first }}Entity.{{ tenant.lower_first }}.name : ''{{ '}}' }}</dd>
          "#,
        }],
    },
    // Update page: tenant list sourced from the management reducer
    FilePatch {
        path: "{{ webapp_dir }}app/entities/{{ entity.kebab }}/{{ entity.kebab }}-update.tsx",
        guard: Guard::Always,
        ops: &[
            PatchOp {
                verb: CatalogVerb::InsertAfter,
                anchor: "import { IRootState } from 'app/shared/reducers';",
                template: "\nimport { get{{ tenant.plural_upper_first }} } from 'app/modules/administration/{{ tenant.lower_first }}-management/{{ tenant.lower_first }}-management.reducer';",
            },
            PatchOp {
                verb: CatalogVerb::Replace,
                anchor: "const mapStateToProps = (storeState: IRootState) => ({",
                template: r#"const mapStateToProps = (storeState: IRootState) => ({
  {{ tenant.plural_lower_first }}: storeState.{{ tenant.lower_first }}Management.{{ tenant.plural_lower_first }},"#,
            },
        ],
    },
    // Shared model: tenant import and optional field
    FilePatch {
        path: "{{ webapp_dir }}app/shared/model/{{ entity.kebab }}.model.ts",
        guard: Guard::Always,
        ops: &[
            PatchOp {
                verb: CatalogVerb::InsertBefore,
                anchor: "export interface I{{ entity.upper_first }} {",
                template: "import { I{{ tenant.upper_first }} } from 'app/shared/model/{{ tenant.kebab }}.model';\n\n",
            },
            PatchOp {
                verb: CatalogVerb::InsertBefore,
                anchor: "name?: string;",
                template: "{{ tenant.lower_first }}?: I{{ tenant.upper_first }};\n  ",
            },
        ],
    },
    // Locale resources: one tenant label per active language
    FilePatch {
        path: "{{ webapp_dir }}i18n/{{ language }}/{{ entity.kebab }}.json",
        guard: Guard::Translation,
        ops: &[PatchOp {
            verb: CatalogVerb::InsertBefore,
            anchor: "\"detail\": {",
            template: "\"{{ tenant.lower_first }}\": \"{{ tenant.upper_first }}\",\n            ",
        }],
    },
];
