use burn::{
    nn::{
        attention::{MhaInput, MultiHeadAttention, MultiHeadAttentionConfig},
        Dropout, DropoutConfig,
        Embedding, EmbeddingConfig,
        LayerNorm, LayerNormConfig,
        Linear, LinearConfig,
    },
    prelude::*,
    tensor::activation::{gelu, tanh},
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct SequenceClassifierConfig {
    pub vocab_size:              usize,
    pub max_position_embeddings: usize,
    pub hidden_size:             usize,
    pub num_heads:               usize,
    pub num_layers:              usize,
    pub intermediate_size:       usize,
    #[config(default = 2)]
    pub type_vocab_size:         usize,
    #[config(default = 2)]
    pub num_labels:              usize,
    #[config(default = 0.0)]
    pub dropout:                 f64,
}

impl SequenceClassifierConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> SequenceClassifier<B> {
        let token_embedding      = EmbeddingConfig::new(self.vocab_size, self.hidden_size).init(device);
        let position_embedding   = EmbeddingConfig::new(self.max_position_embeddings, self.hidden_size).init(device);
        let token_type_embedding = EmbeddingConfig::new(self.type_vocab_size, self.hidden_size).init(device);
        let embedding_norm       = LayerNormConfig::new(self.hidden_size).init(device);
        let layers: Vec<EncoderBlock<B>> = (0..self.num_layers)
            .map(|_| self.build_encoder_block(device))
            .collect();
        let pooler     = LinearConfig::new(self.hidden_size, self.hidden_size).init(device);
        let classifier = LinearConfig::new(self.hidden_size, self.num_labels).init(device);
        let dropout    = DropoutConfig::new(self.dropout).init();
        SequenceClassifier {
            token_embedding, position_embedding, token_type_embedding,
            embedding_norm, layers, pooler, classifier, dropout,
            vocab_size:              self.vocab_size,
            max_position_embeddings: self.max_position_embeddings,
        }
    }

    fn build_encoder_block<B: Backend>(&self, device: &B::Device) -> EncoderBlock<B> {
        let self_attn   = MultiHeadAttentionConfig::new(self.hidden_size, self.num_heads)
            .with_dropout(self.dropout)
            .init(device);
        let ffn_linear1 = LinearConfig::new(self.hidden_size, self.intermediate_size).init(device);
        let ffn_linear2 = LinearConfig::new(self.intermediate_size, self.hidden_size).init(device);
        let norm1   = LayerNormConfig::new(self.hidden_size).init(device);
        let norm2   = LayerNormConfig::new(self.hidden_size).init(device);
        let dropout = DropoutConfig::new(self.dropout).init();
        EncoderBlock { self_attn, ffn_linear1, ffn_linear2, norm1, norm2, dropout }
    }
}

#[derive(Module, Debug)]
pub struct EncoderBlock<B: Backend> {
    pub self_attn:   MultiHeadAttention<B>,
    pub ffn_linear1: Linear<B>,
    pub ffn_linear2: Linear<B>,
    pub norm1:       LayerNorm<B>,
    pub norm2:       LayerNorm<B>,
    pub dropout:     Dropout,
}

impl<B: Backend> EncoderBlock<B> {
    /// Post-norm block: x = norm(x + attn(x)); x = norm(x + ffn(x))
    pub fn forward(&self, x: Tensor<B, 3>) -> Tensor<B, 3> {
        let attn_output = self.self_attn.forward(MhaInput::self_attn(x.clone())).context;
        let x = self.norm1.forward(x + self.dropout.forward(attn_output));
        let ffn_out = self.ffn_linear2.forward(gelu(self.ffn_linear1.forward(x.clone())));
        self.norm2.forward(x + self.dropout.forward(ffn_out))
    }
}

/// BERT-style encoder with a pooled [CLS] classification head.
#[derive(Module, Debug)]
pub struct SequenceClassifier<B: Backend> {
    pub token_embedding:         Embedding<B>,
    pub position_embedding:      Embedding<B>,
    pub token_type_embedding:    Embedding<B>,
    pub embedding_norm:          LayerNorm<B>,
    pub layers:                  Vec<EncoderBlock<B>>,
    pub pooler:                  Linear<B>,
    pub classifier:              Linear<B>,
    pub dropout:                 Dropout,
    pub vocab_size:              usize,
    pub max_position_embeddings: usize,
}

impl<B: Backend> SequenceClassifier<B> {
    /// input_ids: [batch, seq_len] → logits: [batch, num_labels]
    pub fn forward(&self, input_ids: Tensor<B, 2, Int>) -> Tensor<B, 2> {
        let [batch_size, seq_len] = input_ids.dims();
        let device = input_ids.device();

        let tok_emb = self.token_embedding.forward(input_ids);

        let positions = Tensor::<B, 1, Int>::arange(0..seq_len as i64, &device)
            .unsqueeze::<2>()
            .expand([batch_size, seq_len]);
        let pos_emb = self.position_embedding.forward(positions);

        // Single-segment input: every token belongs to segment 0
        let token_types = Tensor::<B, 2, Int>::zeros([batch_size, seq_len], &device);
        let type_emb    = self.token_type_embedding.forward(token_types);

        let mut x = self.dropout.forward(self.embedding_norm.forward(tok_emb + pos_emb + type_emb));
        for layer in &self.layers {
            x = layer.forward(x);
        }
        let [_, _, hidden] = x.dims();

        // Pool the [CLS] position
        let cls    = x.slice([0..batch_size, 0..1, 0..hidden]).reshape([batch_size, hidden]);
        let pooled = tanh(self.pooler.forward(cls));

        self.classifier.forward(self.dropout.forward(pooled))
    }
}
