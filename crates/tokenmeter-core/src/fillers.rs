//! Filler phrases the optimizer looks for
//!
//! Order matters: suggestions are reported in table order.

/// A filler phrase with its suggested replacement and per-occurrence cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillerPhrase {
    pub phrase: &'static str,
    /// `None` means delete
    pub replacement: Option<&'static str>,
    pub token_savings: usize,
}

const fn delete(phrase: &'static str, token_savings: usize) -> FillerPhrase {
    FillerPhrase {
        phrase,
        replacement: None,
        token_savings,
    }
}

const fn replace(
    phrase: &'static str,
    replacement: &'static str,
    token_savings: usize,
) -> FillerPhrase {
    FillerPhrase {
        phrase,
        replacement: Some(replacement),
        token_savings,
    }
}

pub static FILLER_PHRASES: &[FillerPhrase] = &[
    // Opinion markers
    delete("我认为", 2),
    delete("我相信", 2),
    delete("我觉得", 2),
    delete("我想", 1),
    // Attention markers
    delete("请注意", 2),
    delete("值得注意的是", 4),
    delete("需要指出的是", 4),
    // Assertions of obviousness
    delete("毫无疑问", 3),
    delete("显而易见", 3),
    delete("众所周知", 3),
    delete("实际上", 2),
    delete("事实上", 2),
    // Summaries and restatements
    delete("总的来说", 3),
    delete("总而言之", 3),
    delete("简而言之", 3),
    delete("换句话说", 3),
    delete("换言之", 2),
    delete("也就是说", 3),
    // Sequencing and connectives
    delete("首先", 1),
    delete("其次", 1),
    delete("最后", 1),
    delete("此外", 1),
    delete("另外", 1),
    delete("因此", 1),
    delete("所以", 1),
    delete("然而", 1),
    delete("但是", 1),
    delete("不过", 1),
    // Modal verbs
    delete("可以", 1),
    delete("能够", 1),
    // Intensifiers
    replace("非常", "很", 1),
    replace("十分", "很", 1),
    replace("特别", "很", 1),
    replace("极其", "很", 1),
    replace("极为", "很", 1),
    replace("极度", "很", 1),
    delete("尤其", 1),
    delete("格外", 1),
    delete("相当", 1),
    // Hedges
    delete("比较", 1),
    delete("稍微", 1),
    delete("略微", 1),
    delete("有点", 1),
    delete("有些", 1),
    delete("一些", 1),
    delete("一点", 1),
    delete("一下", 1),
    // Light verbs
    delete("进行", 1),
    delete("实施", 1),
    delete("执行", 1),
    delete("开展", 1),
    delete("采取", 1),
    replace("使用", "用", 1),
    replace("利用", "用", 1),
    replace("应用", "用", 1),
    // Cognition and desire verbs
    delete("考虑", 1),
    delete("思考", 1),
    delete("认为", 1),
    delete("觉得", 1),
    delete("感觉", 1),
    delete("希望", 1),
    delete("期望", 1),
    delete("期待", 1),
    delete("盼望", 1),
    delete("渴望", 1),
];
