//! Patch catalog for the Angular client
//!
//! Entries are ordered the way the client generator lays the files out:
//! entity views first, then the shared model, then test specs and locale
//! resources.

use super::{CatalogVerb, FilePatch, Guard, PatchOp};

pub(super) const CATALOG: &[FilePatch] = &[
    // Detail view: tenant row before the closing definition list
    FilePatch {
        path: "{{ webapp_dir }}app/entities/{{ entity.kebab }}/{{ entity.kebab }}-detail.component.html",
        guard: Guard::Always,
        ops: &[PatchOp {
            verb: CatalogVerb::InsertBefore,
            anchor: "</dl>",
            template: r#"<dt><span>{{ tenant.upper_first }}</span></dt>
        <dd>
            <div *ngIf="{{ entity.lower_first }}.{{ tenant.lower_first }}">
                <a [routerLink]="['/admin/{{ tenant.lower_first }}-management', {{ entity.lower_first }}.{{ tenant.lower_first }}?.id, 'view']">{{ '{{' }}{{ entity.lower_first }}.{{ tenant.lower_first }}?.name{{ '}}' }}</a>
            </div>
        </dd>
        "#,
        }],
    },
    // Update view: tenant selector ahead of the cancel button
    FilePatch {
        path: "{{ webapp_dir }}app/entities/{{ entity.kebab }}/{{ entity.kebab }}-update.component.html",
        guard: Guard::Always,
        ops: &[PatchOp {
            verb: CatalogVerb::Replace,
            anchor: r#"<button type="button" id="cancel-save" class="btn btn-secondary"  (click)="previousState()">"#,
            template: r#"<div class="form-group" *ngIf="!currentAccount.{{ tenant.lower_first }}">
                    <label class="form-control-label" for="field_{{ tenant.lower_first }}">{{ tenant.upper_first }}</label>
                    <select class="form-control" id="field_{{ tenant.lower_first }}" name="{{ tenant.lower_first }}" [(ngModel)]="{{ entity.lower_first }}.{{ tenant.lower_first }}">
                        <option [ngValue]="null"></option>
                        <option [ngValue]="{{ tenant.lower_first }}.id === {{ entity.lower_first }}.{{ tenant.lower_first }}?.id ? {{ entity.lower_first }}.{{ tenant.lower_first }} : {{ tenant.lower_first }}" *ngFor="let {{ tenant.lower_first }} of {{ tenant.plural_lower_first }}">{{ '{{' }}{{ tenant.lower_first }}.name{{ '}}' }}</option>
                    </select>
                </div>
                <button type="button" id="cancel-save" class="btn btn-secondary"  (click)="previousState()">"#,
        }],
    },
    // Update component: tenant service wiring
    FilePatch {
        path: "{{ webapp_dir }}app/entities/{{ entity.kebab }}/{{ entity.kebab }}-update.component.ts",
        guard: Guard::Always,
        ops: &[
            PatchOp {
                verb: CatalogVerb::InsertBefore,
                anchor: "import { Observable } from 'rxjs';",
                template: r#"import { {{ tenant.upper_first }} } from 'app/admin/{{ tenant.lower_first }}-management/{{ tenant.lower_first }}.model';
import { {{ tenant.upper_first }}Service } from 'app/admin/{{ tenant.lower_first }}-management/{{ tenant.lower_first }}.service';
import { AccountService } from 'app/core/auth/account.service';
"#,
            },
            PatchOp {
                verb: CatalogVerb::InsertBefore,
                anchor: "isSaving: boolean;",
                template: "{{ tenant.plural_lower_first }}: {{ tenant.upper_first }}[];\n    currentAccount: any;\n    ",
            },
            PatchOp {
                verb: CatalogVerb::Replace,
                anchor: "protected activatedRoute: ActivatedRoute) {}",
                template: r#"protected {{ tenant.lower_first }}Service: {{ tenant.upper_first }}Service,
        protected accountService: AccountService,
        protected activatedRoute: ActivatedRoute) {}"#,
            },
            PatchOp {
                verb: CatalogVerb::Replace,
                anchor: "ngOnInit() {",
                template: r#"ngOnInit() {
        this.{{ tenant.lower_first }}Service.query().subscribe(res => (this.{{ tenant.plural_lower_first }} = res.body));
        this.accountService.identity().then(account => (this.currentAccount = account));"#,
            },
            PatchOp {
                verb: CatalogVerb::InsertBefore,
                anchor: "if (this.{{ entity.lower_first }}.id !== undefined) {",
                template: r#"if (this.currentAccount.{{ tenant.lower_first }}) {
            this.{{ entity.lower_first }}.{{ tenant.lower_first }} = this.currentAccount.{{ tenant.lower_first }};
        }
        "#,
            },
        ],
    },
    // List view: tenant column, hidden for tenant-scoped accounts
    FilePatch {
        path: "{{ webapp_dir }}app/entities/{{ entity.kebab }}/{{ entity.kebab }}.component.html",
        guard: Guard::Always,
        ops: &[
            PatchOp {
                verb: CatalogVerb::InsertBefore,
                anchor: "<th></th>",
                template: r#"{% if translation %}<th *ngIf="!currentAccount.{{ tenant.lower_first }}"><span jhiTranslate="userManagement{{ tenant.upper_first }}">{{ tenant.upper_first }}</span></th>{% else %}<th *ngIf="!currentAccount.{{ tenant.lower_first }}"><span>{{ tenant.upper_first }}</span></th>{% endif %}
                "#,
            },
            PatchOp {
                verb: CatalogVerb::InsertBefore,
                anchor: r#"<td class="text-right">"#,
                template: r#"<td *ngIf="!currentAccount.{{ tenant.lower_first }}">
                    <div *ngIf="{{ entity.lower_first }}.{{ tenant.lower_first }}">
                        <a [routerLink]="['/admin/{{ tenant.lower_first }}-management', {{ entity.lower_first }}.{{ tenant.lower_first }}?.id, 'view']">{{ '{{' }}{{ entity.lower_first }}.{{ tenant.lower_first }}?.name{{ '}}' }}</a>
                    </div>
                </td>
                "#,
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
                template: "import { {{ tenant.upper_first }} } from 'app/admin/{{ tenant.lower_first }}-management/{{ tenant.lower_first }}.model';\n\n",
            },
            PatchOp {
                verb: CatalogVerb::InsertBefore,
                anchor: "name?: string;",
                template: "{{ tenant.lower_first }}?: {{ tenant.upper_first }};\n    ",
            },
        ],
    },
    // e2e: tenant management page object gains a name getter
    FilePatch {
        path: "{{ client_test_dir }}e2e/admin/{{ tenant.lower_first }}-management.spec.ts",
        guard: Guard::E2e,
        ops: &[PatchOp {
            verb: CatalogVerb::InsertBefore,
            anchor: "clickOnCreateButton() {",
            template: r#"get{{ tenant.upper_first }}Name() {
        return element.all(by.css('jhi-{{ tenant.lower_first }}-mgmt div table tbody tr td:nth-child(2)')).first().getText();
    }

    "#,
        }],
    },
    // e2e: entity spec selects a tenant before saving
    FilePatch {
        path: "{{ client_test_dir }}e2e/entities/{{ entity.kebab }}/{{ entity.kebab }}.spec.ts",
        guard: Guard::E2e,
        ops: &[
            PatchOp {
                verb: CatalogVerb::InsertBefore,
                anchor: "describe('{{ entity.upper_first }} e2e test', () => {",
                template: "import { {{ tenant.upper_first }}MgmtComponentsPage } from '../../admin/{{ tenant.lower_first }}-management.spec';\n\n",
            },
            PatchOp {
                verb: CatalogVerb::InsertBefore,
                anchor: "let {{ entity.lower_first }}ComponentsPage: {{ entity.upper_first }}ComponentsPage;",
                template: "let {{ tenant.lower_first }}MgmtComponentsPage: {{ tenant.upper_first }}MgmtComponentsPage;\n    ",
            },
            PatchOp {
                verb: CatalogVerb::Replace,
                anchor: "it('should create and save {{ entity.plural_upper_first }}', () => {",
                template: r#"it('should create and save {{ entity.plural_upper_first }}', () => {
        {{ tenant.lower_first }}MgmtComponentsPage = new {{ tenant.upper_first }}MgmtComponentsPage();"#,
            },
            PatchOp {
                verb: CatalogVerb::InsertBefore,
                anchor: "{{ entity.lower_first }}UpdatePage.save();",
                template: "{{ entity.lower_first }}UpdatePage.set{{ tenant.upper_first }}();\n        ",
            },
        ],
    },
    // e2e: entity page object learns to pick a tenant
    FilePatch {
        path: "{{ client_test_dir }}e2e/entities/{{ entity.kebab }}/{{ entity.kebab }}.page-object.ts",
        guard: Guard::E2e,
        ops: &[
            PatchOp {
                verb: CatalogVerb::Replace,
                anchor: "} from 'protractor';",
                template: ", protractor } from 'protractor';",
            },
            PatchOp {
                verb: CatalogVerb::InsertBefore,
                anchor: "getPageTitle() {",
                template: "{{ tenant.lower_first }}Select = element(by.css('select'));\n\n    ",
            },
            PatchOp {
                verb: CatalogVerb::InsertBefore,
                anchor: "save(): promise.Promise<void> {",
                template: r#"async set{{ tenant.upper_first }}() {
        await this.{{ tenant.lower_first }}Select.all(by.tagName('option')).last().click();
    }

    "#,
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
