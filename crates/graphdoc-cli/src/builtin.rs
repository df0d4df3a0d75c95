// Copyright 2025 Graphtide Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The database product's documented surface
//!
//! Every documentable item is registered here explicitly. When a component
//! gains a setting, bean, metric or function it must be added to the matching
//! builder call below to appear in the generated reference.

use graphdoc_registry::beans::{BeanAttribute, BeanDescriptor, InMemoryBeanRegistry};
use graphdoc_registry::functions::{FunctionRecord, StaticFunctionSource};
use graphdoc_registry::metrics::MetricsRegistry;
use graphdoc_registry::settings::SettingsRegistry;

/// All documentable configuration settings
pub fn settings() -> SettingsRegistry {
    let mut registry = SettingsRegistry::new();
    registry
        .setting(
            "server.memory.pagecache.size",
            "The amount of memory to use for mapping the store files, in bytes.",
        )
        .valid_values("a byte size (valid units are `k`, `M`, `G`)")
        .default_value("512M")
        .register();
    registry
        .setting(
            "db.checkpoint.interval.time",
            "Configures the time interval between checkpoints.",
        )
        .valid_values("a duration (valid units are `ms`, `s`, `m`, `h`)")
        .default_value("15m")
        .register();
    registry
        .setting(
            "db.checkpoint.interval.tx",
            "Configures the transaction interval between checkpoints.",
        )
        .valid_values("a positive integer")
        .default_value("100000")
        .register();
    registry
        .setting(
            "db.tx_log.rotation.size",
            "Specifies at which file size the transaction log will auto-rotate.",
        )
        .valid_values("a byte size, minimum `128K`")
        .default_value("256M")
        .register();
    registry
        .setting(
            "db.tx_log.rotation_threshold",
            "Specifies at which file size the logical log will auto-rotate.",
        )
        .deprecated("Replaced by `db.tx_log.rotation.size`.")
        .register();
    registry
        .setting(
            "server.bolt.thread_pool_max_size",
            "The maximum number of threads allowed in the bolt thread pool.",
        )
        .valid_values("a positive integer")
        .default_value("400")
        .register();
    registry
        .setting(
            "db.query.timeout",
            "The maximum time interval of a query before it is terminated.",
        )
        .valid_values("a duration (valid units are `ms`, `s`, `m`, `h`)")
        .default_value("0s (unlimited)")
        .register();
    registry
        .setting(
            "unsupported.db.store.inspect",
            "Enables low-level store inspection hooks.",
        )
        .internal()
        .register();
    registry
}

/// All documentable management beans
pub fn beans() -> InMemoryBeanRegistry {
    let mut registry = InMemoryBeanRegistry::new();
    registry.register(
        BeanDescriptor::new("Kernel", "Information about the database kernel.")
            .with_attribute(BeanAttribute::read_only(
                "KernelStartTime",
                "The time from which this database instance was available.",
                "Date",
            ))
            .with_attribute(BeanAttribute::read_only(
                "DatabaseName",
                "The name of the mounted database.",
                "String",
            ))
            .with_attribute(BeanAttribute::read_only(
                "ReadOnly",
                "Whether the database is in read-only mode.",
                "boolean",
            )),
    );
    registry.register(
        BeanDescriptor::new("Page cache", "Information about the page cache.")
            .with_attribute(BeanAttribute::read_only(
                "Faults",
                "The total number of page faults since the cache was created.",
                "long",
            ))
            .with_attribute(BeanAttribute::read_only(
                "Evictions",
                "The total number of page evictions since the cache was created.",
                "long",
            ))
            .with_attribute(BeanAttribute::read_only(
                "HitRatio",
                "The ratio of hits to total lookups in the page cache.",
                "double",
            )),
    );
    registry.register(
        BeanDescriptor::new("Primitive count", "Estimates of the numbers of different kinds of entities.")
            .with_attribute(BeanAttribute::read_only(
                "NumberOfNodeIdsInUse",
                "An estimation of the number of nodes used in this database.",
                "long",
            ))
            .with_attribute(BeanAttribute::read_only(
                "NumberOfRelationshipIdsInUse",
                "An estimation of the number of relationships used in this database.",
                "long",
            )),
    );
    registry.register(
        BeanDescriptor::new("Transactions", "Information about the transaction manager.")
            .with_attribute(BeanAttribute::read_only(
                "NumberOfOpenTransactions",
                "The number of currently open transactions.",
                "long",
            ))
            .with_attribute(BeanAttribute::read_only(
                "PeakNumberOfConcurrentTransactions",
                "The highest number of transactions ever opened concurrently.",
                "long",
            ))
            .with_attribute(BeanAttribute::read_only(
                "LastCommittedTxId",
                "The id of the latest committed transaction.",
                "long",
            )),
    );
    registry.register(
        BeanDescriptor::new(
            "Diagnostics List<Map<String, Object>>",
            "Diagnostics dump entries, keyed by provider.",
        ),
    );
    registry
}

/// All documented metrics, grouped by subsystem section
pub fn metrics() -> MetricsRegistry {
    let mut registry = MetricsRegistry::new();
    registry.document(
        "transaction",
        "db.transaction.active",
        "The number of currently active transactions.",
    );
    registry.document(
        "transaction",
        "db.transaction.committed",
        "The total number of committed transactions.",
    );
    registry.document(
        "transaction",
        "db.transaction.rollbacks",
        "The total number of rolled back transactions.",
    );
    registry.document(
        "page cache",
        "db.pagecache.hits",
        "The total number of page hits happening in the page cache.",
    );
    registry.document(
        "page cache",
        "db.pagecache.page_faults",
        "The total number of page faults happening in the page cache.",
    );
    registry.document(
        "checkpoint",
        "db.checkpoint.events",
        "The total number of checkpoint events executed so far.",
    );
    registry.document(
        "checkpoint",
        "db.checkpoint.total_time",
        "The total time spent in checkpointing so far.",
    );
    registry
}

/// The documentable query functions, as `CALL dbms.functions()` reports them
pub fn functions() -> StaticFunctionSource {
    StaticFunctionSource::new(vec![
        FunctionRecord::new(
            "abs",
            "abs(input :: FLOAT) :: FLOAT",
            "Returns the absolute value of a floating point number.",
        ),
        FunctionRecord::new(
            "abs",
            "abs(input :: INTEGER) :: INTEGER",
            "Returns the absolute value of an integer.",
        ),
        FunctionRecord::new(
            "coalesce",
            "coalesce(input :: ANY) :: ANY",
            "Returns the first non-null value in a list of expressions.",
        ),
        FunctionRecord::new(
            "collect",
            "collect(input :: ANY) :: LIST OF ANY",
            "Returns a list containing the values returned by an expression.",
        ),
        FunctionRecord::new(
            "length",
            "length(input :: PATH) :: INTEGER",
            "Returns the length of a path.",
        ),
        FunctionRecord::new(
            "size",
            "size(input :: LIST OF ANY) :: INTEGER",
            "Returns the number of items in a list.",
        ),
        FunctionRecord::new(
            "timestamp",
            "timestamp() :: INTEGER",
            "Returns the difference, measured in milliseconds, between the current time and midnight, January 1, 1970 UTC.",
        ),
        FunctionRecord::new(
            "toString",
            "toString(input :: ANY) :: STRING",
            "Converts an integer, float or boolean value to a string.",
        ),
    ])
}
